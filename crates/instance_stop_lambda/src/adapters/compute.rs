use crate::runtime::contract::{StopInstancesResponse, StopRequest};

pub trait InstanceStopper {
    type Error;

    fn stop_instances(&self, request: &StopRequest) -> Result<StopInstancesResponse, Self::Error>;
}
