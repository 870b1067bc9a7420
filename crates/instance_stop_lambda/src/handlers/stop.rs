use thiserror::Error;
use tracing::{info, warn};

use crate::adapters::compute::InstanceStopper;
use crate::runtime::config::{ConfigSource, ConfigurationError, HandlerConfig};
use crate::runtime::contract::{StopInstancesResponse, StopRequest};

#[derive(Debug, Error)]
pub enum HandlerError<E> {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Remote(E),
}

impl<E> HandlerError<E> {
    pub fn remote(&self) -> Option<&E> {
        match self {
            Self::Remote(error) => Some(error),
            Self::Configuration(_) => None,
        }
    }
}

impl<E> HandlerError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    // Remote errors are boxed without the enum wrapper.
    pub fn into_boxed(self) -> Box<dyn std::error::Error + Send + Sync> {
        match self {
            Self::Configuration(error) => Box::new(error),
            Self::Remote(error) => Box::new(error),
        }
    }
}

pub fn handle_stop_event<T, C, S>(
    _trigger: T,
    _context: &C,
    config_source: &impl ConfigSource,
    stopper: &S,
) -> Result<StopInstancesResponse, HandlerError<S::Error>>
where
    S: InstanceStopper,
    S::Error: std::fmt::Display,
{
    let config = HandlerConfig::resolve(config_source)?;
    let request = StopRequest::for_config(&config);

    info!(instance_id = %config.instance_id, "stop_requested");

    match stopper.stop_instances(&request) {
        Ok(response) => {
            info!(
                instance_id = %config.instance_id,
                stopping_instances = response.stopping_instances.len(),
                "stop_submitted"
            );
            Ok(response)
        }
        Err(error) => {
            warn!(instance_id = %config.instance_id, error = %error, "stop_failed");
            Err(HandlerError::Remote(error))
        }
    }
}
