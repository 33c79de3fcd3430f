use serde::{Deserialize, Serialize};

/// Rate plan attached to an account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Plan {
    pub voice_rate: String,
    pub messaging_rate: String,
    pub name_rate: String,
    pub monthly_cloud_credits: String,
}

/// Main account details as returned by `GET {auth_id}/`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Account {
    pub account_type: String,
    pub address: String,
    pub api_id: String,
    pub auth_id: String,
    pub auto_recharge: bool,
    pub billing_mode: String,
    pub cash_credits: String,
    pub city: String,
    pub created: String,
    pub modified: String,
    pub name: String,
    pub plan: Option<Plan>,
    pub resource_uri: String,
    pub state: String,
    pub timezone: String,
}

/// Editable account fields; unset fields are not sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AccountModifyParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Subaccount record.
///
/// Only `name` and `enabled` are sent when a subaccount is created or modified;
/// the remaining fields are populated by Plivo.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Subaccount {
    #[serde(skip_serializing)]
    pub account: String,
    #[serde(skip_serializing)]
    pub api_id: String,
    #[serde(skip_serializing)]
    pub auth_id: String,
    #[serde(skip_serializing)]
    pub auth_token: String,
    #[serde(skip_serializing)]
    pub created: String,
    #[serde(skip_serializing)]
    pub modified: String,
    pub name: String,
    pub enabled: bool,
    #[serde(skip_serializing)]
    pub resource_uri: String,
}

impl Subaccount {
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            enabled,
            ..Default::default()
        }
    }
}

/// Body returned by `POST {auth_id}/Subaccount/`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SubaccountCreated {
    pub api_id: String,
    pub auth_id: String,
    pub auth_token: String,
    pub message: String,
}
