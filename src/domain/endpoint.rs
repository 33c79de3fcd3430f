use serde::{Deserialize, Serialize};

/// SIP endpoint registered under the account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Endpoint {
    pub alias: String,
    pub api_id: String,
    pub application: String,
    pub endpoint_id: String,
    pub resource_uri: String,
    pub sip_registered: String,
    pub sip_uri: String,
    pub sub_account: Option<String>,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EndpointCreateParams {
    pub username: String,
    pub password: String,
    pub alias: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

impl EndpointCreateParams {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            alias: alias.into(),
            app_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct EndpointCreated {
    pub alias: String,
    pub api_id: String,
    pub endpoint_id: String,
    pub message: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EndpointModifyParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}
