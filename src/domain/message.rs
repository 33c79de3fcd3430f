use serde::{Deserialize, Serialize};

/// Parameters for `POST {auth_id}/Message/`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MessageSendParams {
    pub src: String,
    /// One or more destinations separated by `<`.
    pub dst: String,
    pub text: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl MessageSendParams {
    pub fn new(src: impl Into<String>, dst: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct MessageCreated {
    pub api_id: String,
    pub message: String,
    pub message_uuid: Vec<String>,
}

/// Message detail record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Message {
    pub api_id: String,
    pub carrier_rate: String,
    pub cloud_rate: String,
    pub from_number: String,
    pub message_direction: String,
    pub message_state: String,
    pub message_time: String,
    pub message_type: String,
    pub message_uuid: String,
    pub resource_uri: String,
    pub to_number: String,
    pub total_amount: String,
    pub total_rate: String,
    pub units: Option<u32>,
}
