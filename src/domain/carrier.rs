use serde::{Deserialize, Serialize};

use crate::domain::is_zero;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct IncomingCarrier {
    pub carrier_id: String,
    pub ip_set: String,
    pub name: String,
    pub resource_uri: String,
    pub sms: bool,
    pub voice: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct OutgoingCarrier {
    pub address: String,
    pub carrier_id: String,
    pub failover_address: String,
    pub failover_prefix: String,
    pub ip_set: String,
    pub name: String,
    pub prefix: String,
    pub resource_uri: String,
    pub retries: Option<u32>,
    pub retry_seconds: Option<u32>,
    pub suffix: String,
}

/// Filters for listing carriers (incoming or outgoing).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CarrierListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub offset: u32,
}

/// Incoming carrier fields; both are required when adding a carrier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct IncomingCarrierParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Comma separated list of source IP addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_set: Option<String>,
}

impl IncomingCarrierParams {
    pub fn new(name: impl Into<String>, ip_set: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ip_set: Some(ip_set.into()),
        }
    }
}

/// Outgoing carrier fields; `name` and `address` are required when adding a carrier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OutgoingCarrierParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_seconds: Option<u32>,
}

impl OutgoingCarrierParams {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            address: Some(address.into()),
            ..Default::default()
        }
    }
}
