use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    MissingEnv { var: &'static str },
    InvalidUrl { input: String, reason: String },
    InvalidHeader { field: &'static str },
    InvalidPathSegment { field: &'static str, input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::MissingEnv { var } => write!(f, "environment variable {var} is not set"),
            Self::InvalidUrl { input, reason } => write!(f, "invalid URL {input:?}: {reason}"),
            Self::InvalidHeader { field } => write!(f, "{field} is not a valid header value"),
            Self::InvalidPathSegment { field, input } => {
                write!(f, "{field} {input:?} cannot be used as a path segment")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
