use serde::{Deserialize, Serialize};

use crate::domain::is_false;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Application {
    pub api_id: String,
    pub app_id: String,
    pub app_name: String,
    pub answer_url: String,
    pub answer_method: String,
    pub hangup_url: String,
    pub hangup_method: String,
    pub fallback_answer_url: String,
    pub fallback_method: String,
    pub message_url: String,
    pub message_method: String,
    pub default_app: bool,
    pub default_endpoint_app: bool,
    pub enabled: bool,
    pub production_app: bool,
    pub public_uri: bool,
    pub resource_uri: String,
    pub sip_uri: String,
    pub sub_account: Option<String>,
}

/// Parameters for creating or modifying an application.
///
/// `app_name` and `answer_url` are required on create; every field is optional on modify.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ApplicationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hangup_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hangup_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_answer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_method: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub default_number_app: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub default_endpoint_app: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
}

impl ApplicationParams {
    /// Parameters with the two fields required to create an application.
    pub fn new(app_name: impl Into<String>, answer_url: impl Into<String>) -> Self {
        Self {
            app_name: Some(app_name.into()),
            answer_url: Some(answer_url.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ApplicationCreated {
    pub api_id: String,
    pub app_id: String,
    pub message: String,
}
