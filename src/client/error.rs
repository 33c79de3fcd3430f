use std::error::Error as StdError;

use url::Url;

use crate::domain::{FieldError, RawResponse, ValidationError};
use crate::transport::Method;

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`crate::PlivoClient`].
///
/// Every call either yields a fully decoded payload or exactly one of these.
/// Nothing is retried.
pub enum PlivoError {
    /// The request could not be built (unparsable path, body serialization failure).
    #[error("encoding error: {0}")]
    Encoding(#[source] Box<dyn StdError + Send + Sync>),

    /// HTTP client / transport failure (DNS, TLS, timeouts, refused connections).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Plivo answered with a status outside 200..=299.
    #[error(transparent)]
    Api(Box<ApiError>),

    /// A successful response body did not match the expected shape.
    #[error("decoding error: {source}")]
    Decoding {
        #[source]
        source: serde_json::Error,
        response: Box<RawResponse>,
    },

    /// Client configuration was rejected before any request was made.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl PlivoError {
    /// Structured API error details, when Plivo rejected the request.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Raw response behind the error, when one was received.
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Self::Api(err) => Some(&err.response),
            Self::Decoding { response, .. } => Some(response),
            _ => None,
        }
    }

    /// HTTP status of the response behind the error, when one was received.
    pub fn status(&self) -> Option<u16> {
        self.response().map(|response| response.status)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{method} {url}: {status} {message} {errors:?}")]
/// Non-2xx response from Plivo.
///
/// `message` and `errors` come from the JSON error body and are left empty
/// when the body does not have that shape.
pub struct ApiError {
    pub method: Method,
    pub url: Url,
    pub status: u16,
    pub message: String,
    pub errors: Vec<FieldError>,
    pub response: RawResponse,
}
