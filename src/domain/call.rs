use serde::{Deserialize, Serialize};

use crate::domain::{is_false, is_zero};

/// Parameters for `POST {auth_id}/Call/`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CallMakeParams {
    pub from: String,
    pub to: String,
    pub answer_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hangup_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hangup_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_digits: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub send_on_preanswer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hangup_on_ring: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_detection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_detection_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sip_headers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring_timeout: Option<u32>,
}

impl CallMakeParams {
    /// `to` may hold several destinations separated by `<`.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        answer_url: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            answer_url: answer_url.into(),
            ..Default::default()
        }
    }
}

/// Request id(s) returned when a call is queued: one per destination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RequestUuid {
    One(String),
    Many(Vec<String>),
}

impl RequestUuid {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::One(value) => vec![value.clone()],
            Self::Many(values) => values.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CallCreated {
    pub api_id: String,
    pub message: String,
    pub request_uuid: Option<RequestUuid>,
}

/// Query filters for `GET {auth_id}/Call/`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CallListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub offset: u32,
}

/// Call detail record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Call {
    pub answer_time: Option<String>,
    pub api_id: String,
    pub bill_duration: Option<u64>,
    pub billed_duration: Option<u64>,
    pub call_direction: String,
    pub call_duration: Option<u64>,
    pub call_uuid: String,
    pub end_time: Option<String>,
    pub from_number: String,
    pub hangup_cause_name: Option<String>,
    pub initiation_time: Option<String>,
    pub parent_call_uuid: Option<String>,
    pub resource_uri: String,
    pub to_number: String,
    pub total_amount: String,
    pub total_rate: String,
}

/// Body of `GET {auth_id}/Call/?status=live`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct LiveCalls {
    pub api_id: String,
    pub calls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct LiveCall {
    pub api_id: String,
    pub call_status: String,
    pub call_uuid: String,
    pub caller_name: String,
    pub direction: String,
    pub from: String,
    pub to: String,
    pub request_uuid: String,
    pub session_start: String,
}

/// Parameters for transferring a live call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CallTransferParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aleg_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aleg_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bleg_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bleg_method: Option<String>,
}

/// Recording options shared by calls and conferences.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RecordParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RecordingStarted {
    pub api_id: String,
    pub message: String,
    pub recording_id: String,
    pub url: String,
}

/// Body of `DELETE {auth_id}/Call/{uuid}/Record/`; without a URL every recording stops.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub(crate) struct StopRecordingParams {
    #[serde(rename = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CallPlayParams {
    /// Comma separated list of audio file URLs.
    pub urls: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legs: Option<String>,
    #[serde(rename = "loop", skip_serializing_if = "is_false")]
    pub repeat: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub mix: bool,
}

impl CallPlayParams {
    pub fn new(urls: impl Into<String>) -> Self {
        Self {
            urls: urls.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CallSpeakParams {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legs: Option<String>,
    #[serde(rename = "loop", skip_serializing_if = "is_false")]
    pub repeat: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub mix: bool,
}

impl CallSpeakParams {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CallDtmfParams {
    pub digits: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legs: Option<String>,
}
