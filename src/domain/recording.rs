use serde::{Deserialize, Serialize};

use crate::domain::is_zero;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Recording {
    pub add_time: String,
    pub api_id: String,
    pub call_uuid: String,
    pub conference_name: Option<String>,
    pub recording_duration_ms: String,
    pub recording_end_ms: String,
    pub recording_format: String,
    pub recording_id: String,
    pub recording_start_ms: String,
    pub recording_type: String,
    pub recording_url: String,
    pub resource_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordingListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_time: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub offset: u32,
}
