use serde::{Deserialize, Serialize};

/// Country pricing. Rate tables are kept as raw JSON since their layout
/// differs per country and product.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Pricing {
    pub api_id: String,
    pub country: String,
    pub country_code: Option<u32>,
    pub country_iso: String,
    pub message: serde_json::Value,
    pub phone_numbers: serde_json::Value,
    pub voice: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub(crate) struct PricingParams {
    pub country_iso: String,
}
