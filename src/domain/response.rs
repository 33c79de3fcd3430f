use std::fmt;

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// Raw HTTP response as received from Plivo.
///
/// The body is always read to completion, so the status, headers and text
/// stay inspectable after the connection has been released.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Decoded payload plus the raw response it came from.
///
/// `meta` is only populated by list operations.
#[derive(Debug, Clone)]
pub struct Envelope<T> {
    pub data: T,
    pub meta: Option<Meta>,
    pub response: RawResponse,
}

impl<T> Envelope<T> {
    pub(crate) fn new(data: T, response: RawResponse) -> Self {
        Self {
            data,
            meta: None,
            response,
        }
    }

    /// HTTP status code of the underlying response.
    pub fn status(&self) -> u16 {
        self.response.status
    }

    /// Drop the response and keep only the payload.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Transform the payload while keeping the response and pagination metadata.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            data: f(self.data),
            meta: self.meta,
            response: self.response,
        }
    }
}

/// Acknowledgement returned by create/modify calls that carry no resource body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub api_id: String,
    #[serde(default)]
    pub message: String,
}

/// Field-level validation error reported by Plivo.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub code: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} error caused by {} field on {} resource",
            self.code, self.field, self.resource
        )
    }
}
