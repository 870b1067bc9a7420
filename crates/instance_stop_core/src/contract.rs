use serde::{Deserialize, Serialize};

use crate::config::HandlerConfig;

pub const STATE_RUNNING: &str = "running";
pub const STATE_TERMINATED: &str = "terminated";
pub const STATE_STOPPING: &str = "stopping";
pub const STATE_STOPPED: &str = "stopped";

pub const STATE_CODE_RUNNING: i32 = 16;
pub const STATE_CODE_TERMINATED: i32 = 48;
pub const STATE_CODE_STOPPING: i32 = 64;
pub const STATE_CODE_STOPPED: i32 = 80;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StopRequest {
    pub instance_ids: Vec<String>,
}

impl StopRequest {
    pub fn for_config(config: &HandlerConfig) -> Self {
        Self {
            instance_ids: vec![config.instance_id.clone()],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StopInstancesResponse {
    #[serde(default)]
    pub stopping_instances: Vec<InstanceStateChange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceStateChange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_state: Option<InstanceState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_state: Option<InstanceState>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl InstanceState {
    pub fn new(code: i32, name: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            name: Some(name.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}
