use aws_sdk_ec2::config::http::HttpResponse;
use aws_sdk_ec2::error::SdkError;
use aws_sdk_ec2::operation::stop_instances::{StopInstancesError, StopInstancesOutput};
use aws_sdk_ec2::operation::RequestId;
use aws_sdk_ec2::types;

use crate::adapters::compute::InstanceStopper;
use crate::runtime::contract::{
    InstanceState, InstanceStateChange, ResponseMetadata, StopInstancesResponse, StopRequest,
};

pub type Ec2StopError = SdkError<StopInstancesError, HttpResponse>;

#[derive(Debug, Clone)]
pub struct Ec2InstanceStopper {
    ec2_client: aws_sdk_ec2::Client,
}

impl Ec2InstanceStopper {
    pub fn new(ec2_client: aws_sdk_ec2::Client) -> Self {
        Self { ec2_client }
    }
}

impl InstanceStopper for Ec2InstanceStopper {
    type Error = Ec2StopError;

    fn stop_instances(&self, request: &StopRequest) -> Result<StopInstancesResponse, Self::Error> {
        let client = self.ec2_client.clone();
        let instance_ids = request.instance_ids.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .stop_instances()
                    .set_instance_ids(Some(instance_ids))
                    .send()
                    .await
                    .map(|output| response_from_output(&output))
            })
        })
    }
}

pub fn response_from_output(output: &StopInstancesOutput) -> StopInstancesResponse {
    StopInstancesResponse {
        stopping_instances: output
            .stopping_instances()
            .iter()
            .map(|change| InstanceStateChange {
                instance_id: change.instance_id().map(str::to_string),
                current_state: change.current_state().map(state_from_sdk),
                previous_state: change.previous_state().map(state_from_sdk),
            })
            .collect(),
        response_metadata: output.request_id().map(|request_id| ResponseMetadata {
            request_id: Some(request_id.to_string()),
        }),
    }
}

fn state_from_sdk(state: &types::InstanceState) -> InstanceState {
    InstanceState {
        code: state.code(),
        name: state.name().map(|name| name.as_str().to_string()),
    }
}
