use std::cell::Cell;
use std::collections::HashMap;
use std::error::Error as _;

use instance_stop_lambda::adapters::compute::InstanceStopper;
use instance_stop_lambda::handlers::stop::{handle_stop_event, HandlerError};
use instance_stop_lambda::runtime::config::INSTANCE_ID_ENV;
use instance_stop_lambda::runtime::contract::{StopInstancesResponse, StopRequest};
use serde_json::{json, Value};

#[derive(Debug, thiserror::Error)]
#[error("connection reset while calling ec2")]
struct NetworkError {
    #[source]
    cause: std::io::Error,
}

struct CannedStopper {
    calls: Cell<usize>,
    response: Value,
}

impl InstanceStopper for CannedStopper {
    type Error = NetworkError;

    fn stop_instances(&self, request: &StopRequest) -> Result<StopInstancesResponse, Self::Error> {
        self.calls.set(self.calls.get() + 1);
        assert_eq!(request.instance_ids.len(), 1);
        Ok(serde_json::from_value(self.response.clone()).expect("canned response should parse"))
    }
}

struct FailingStopper;

impl InstanceStopper for FailingStopper {
    type Error = NetworkError;

    fn stop_instances(&self, _request: &StopRequest) -> Result<StopInstancesResponse, Self::Error> {
        Err(NetworkError {
            cause: std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer"),
        })
    }
}

#[test]
fn scheduled_event_round_trips_provider_payload() {
    let provider_payload = json!({
        "StoppingInstances": [{
            "InstanceId": "i-0abcd1234",
            "CurrentState": {"Code": 64, "Name": "stopping"},
            "PreviousState": {"Code": 16, "Name": "running"}
        }],
        "ResponseMetadata": {"RequestId": "7a62c49f-347e-4fc4-9331-6e8eEXAMPLE"}
    });
    let stopper = CannedStopper {
        calls: Cell::new(0),
        response: provider_payload.clone(),
    };
    let config = HashMap::from([(INSTANCE_ID_ENV.to_string(), "i-0abcd1234".to_string())]);
    let trigger = json!({
        "version": "0",
        "detail-type": "Scheduled Event",
        "source": "aws.events",
        "detail": {}
    });

    let response =
        handle_stop_event(trigger, &"context", &config, &stopper).expect("stop should succeed");

    assert_eq!(stopper.calls.get(), 1);
    assert_eq!(
        serde_json::to_value(&response).expect("response should serialize"),
        provider_payload
    );
}

#[test]
fn remote_error_keeps_its_source_chain() {
    let config = HashMap::from([(INSTANCE_ID_ENV.to_string(), "i-1".to_string())]);

    let error = handle_stop_event(Value::Null, &(), &config, &FailingStopper)
        .expect_err("stop should fail");

    assert!(matches!(error, HandlerError::Remote(_)));
    assert_eq!(error.to_string(), "connection reset while calling ec2");
    let source = error.source().expect("source should be preserved");
    assert_eq!(source.to_string(), "reset by peer");
}
