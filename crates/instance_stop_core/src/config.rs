use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;

use thiserror::Error;

pub const INSTANCE_ID_ENV: &str = "INSTANCE_ID";

pub trait ConfigSource {
    fn lookup(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(decode_env_value)
    }
}

// Invalid UTF-8 is replaced rather than rejected; the provider decides whether the id is valid.
fn decode_env_value(raw: OsString) -> String {
    raw.to_string_lossy().into_owned()
}

impl ConfigSource for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("{key} must be configured")]
    Missing { key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    pub instance_id: String,
}

impl HandlerConfig {
    pub fn resolve(source: &impl ConfigSource) -> Result<Self, ConfigurationError> {
        let instance_id = source
            .lookup(INSTANCE_ID_ENV)
            .ok_or(ConfigurationError::Missing {
                key: INSTANCE_ID_ENV,
            })?;

        Ok(Self { instance_id })
    }
}
