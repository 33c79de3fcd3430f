use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ConferenceNames {
    pub api_id: String,
    pub conferences: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Conference {
    pub api_id: String,
    pub conference_name: String,
    pub conference_run_time: String,
    pub conference_member_count: String,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Member {
    pub muted: bool,
    pub member_id: String,
    pub deaf: bool,
    pub from: String,
    pub to: String,
    pub caller_name: String,
    pub direction: String,
    pub call_uuid: String,
    pub join_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub(crate) struct ConferencePlayParams {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ConferenceSpeakParams {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl ConferenceSpeakParams {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}
