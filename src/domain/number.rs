use serde::{Deserialize, Serialize};

use crate::domain::is_zero;

/// Number rented by (or added to) the account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Number {
    pub added_on: String,
    pub alias: Option<String>,
    pub api_id: String,
    pub application: Option<String>,
    pub carrier: String,
    pub description: Option<String>,
    pub monthly_rental_rate: String,
    pub number: String,
    pub number_type: String,
    pub plivo_number: bool,
    pub region: String,
    pub resource_uri: String,
    pub sms_enabled: bool,
    pub sms_rate: String,
    pub sub_account: Option<String>,
    pub voice_enabled: bool,
    pub voice_rate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_startswith: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub offset: u32,
}

/// Parameters for adding numbers from your own carrier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NumberAddParams {
    /// Comma separated list of numbers.
    pub numbers: String,
    pub carrier: String,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NumberEditParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
}

/// Filters for searching available number groups.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberSearchParams {
    pub country_iso: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub offset: u32,
}

impl NumberSearchParams {
    pub fn new(country_iso: impl Into<String>) -> Self {
        Self {
            country_iso: country_iso.into(),
            ..Default::default()
        }
    }
}

/// Group of numbers available for rent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct NumberGroup {
    pub group_id: String,
    pub number_type: String,
    pub prefix: String,
    pub region: String,
    pub rental_rate: String,
    pub resource_uri: String,
    pub setup_rate: String,
    pub sms_enabled: bool,
    pub sms_rate: String,
    pub stock: u64,
    pub voice_enabled: bool,
    pub voice_rate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NumberRentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct NumberRental {
    pub api_id: String,
    pub message: String,
    pub numbers: Vec<RentedNumber>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RentedNumber {
    pub number: String,
    pub status: String,
}
