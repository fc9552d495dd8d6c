//! Error codes carried in every JSON error body.
//!
//! Each code has a client-facing identifier, an integer for logs and
//! dashboards, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::InvalidPath.as_str(), "INVALID_PATH");
//! assert_eq!(ErrorCode::InvalidPath.code(), 1002);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body failed field validation
    ValidationError,

    /// Path parameter could not be parsed
    InvalidPath,

    /// Request body is not valid JSON for the target type
    InvalidJson,

    /// Requested resource was not found
    NotFound,

    /// Semantically invalid request that is not a field validation failure
    BadRequest,

    // Server errors
    /// Unexpected failure, including storage errors; details stay in the log
    InternalError,
}

impl ErrorCode {
    /// Identifier clients can match on
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidPath => "INVALID_PATH",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Integer code used in structured logs
    ///
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidPath => 1002,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::BadRequest => 1006,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidPath => "Invalid path parameter",
            Self::InvalidJson => "Invalid JSON format",
            Self::NotFound => "Resource not found",
            Self::BadRequest => "Bad request",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
