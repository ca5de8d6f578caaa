//! Error codes carried in the `code` field of every error body.
//!
//! The code mirrors the HTTP status the error middleware picks, so clients
//! can branch on the body alone.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::NotFound.as_str(), "404");
//! assert_eq!(ErrorCode::System.default_message(), "system error");
//! ```

use axum::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

/// Error classification exposed to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum ErrorCode {
    /// Client-supplied data failed a precondition
    #[serde(rename = "400")]
    BadRequest,

    /// Referenced entity does not exist
    #[serde(rename = "404")]
    NotFound,

    /// Anything else: store, encoding or connection faults
    #[serde(rename = "500")]
    System,
}

impl ErrorCode {
    /// String form used in the `code` field
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "400",
            Self::NotFound => "404",
            Self::System => "500",
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::System => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Default user-facing message
    pub const fn default_message(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::NotFound => "not found",
            Self::System => "system error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
