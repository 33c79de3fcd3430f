use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Plivo account identifier (`auth_id`), also the HTTP Basic username.
///
/// Invariant: non-empty after trimming.
pub struct AuthId(String);

impl AuthId {
    /// Field name used by Plivo (`auth_id`).
    pub const FIELD: &'static str = "auth_id";

    /// Environment variable read by [`crate::Auth::from_env`].
    pub const ENV: &'static str = "PLIVO_AUTH_ID";

    /// Create a validated [`AuthId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, PartialEq, Eq)]
/// Plivo secret token (`auth_token`), the HTTP Basic password.
///
/// Invariant: must not be empty (whitespace is preserved). `Debug` output is redacted.
pub struct AuthToken(String);

impl AuthToken {
    /// Field name used by Plivo (`auth_token`).
    pub const FIELD: &'static str = "auth_token";

    /// Environment variable read by [`crate::Auth::from_env`].
    pub const ENV: &'static str = "PLIVO_AUTH_TOKEN";

    /// Create a validated [`AuthToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the token as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Page window for list operations.
///
/// Zero means "use the server default" and is left out of the query string.
pub struct LimitOffset {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub offset: u32,
}

impl LimitOffset {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }
}

pub(crate) fn is_zero(value: &u32) -> bool {
    *value == 0
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
