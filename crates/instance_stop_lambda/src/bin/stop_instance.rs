use instance_stop_lambda::adapters::ec2::Ec2InstanceStopper;
use instance_stop_lambda::handlers::stop::{handle_stop_event, HandlerError};
use instance_stop_lambda::runtime::config::ProcessEnv;
use instance_stop_lambda::runtime::contract::StopInstancesResponse;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

async fn handle_request(
    stopper: &Ec2InstanceStopper,
    event: LambdaEvent<Value>,
) -> Result<StopInstancesResponse, Error> {
    let (payload, context) = event.into_parts();

    handle_stop_event(payload, &context, &ProcessEnv, stopper).map_err(HandlerError::into_boxed)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let stopper = Ec2InstanceStopper::new(aws_sdk_ec2::Client::new(&aws_config));

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| {
        handle_request(&stopper, event)
    }))
    .await
}
