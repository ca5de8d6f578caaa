//! Error middleware for HTTP handlers.
//!
//! Every handler returns `Result<_, E>` where `E: Into<AppError>`. Axum calls
//! [`IntoResponse`] on the error arm, which makes this module the single place
//! where an error classification becomes a status code:
//!
//! | Variant | Status | `message` | `developer_message` |
//! |---|---|---|---|
//! | [`AppError::BadRequest`] | 400 | the validation message | `"bad request"` |
//! | [`AppError::NotFound`] | 404 | `"not found"` | empty |
//! | [`AppError::System`] | 500 | `"system error"` | the cause chain |

pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::error::Error as StdError;
use thiserror::Error;
use utoipa::ToSchema;

/// Boxed error kept as the cause of a system error
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Standard error response structure.
///
/// ```json
/// {
///   "message": "not found",
///   "developer_message": "",
///   "code": "404"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// User-facing message
    pub message: String,
    /// Detail for developers; carries the underlying cause for system errors
    pub developer_message: String,
    /// Error classification: "400", "404" or "500"
    pub code: ErrorCode,
}

/// Structured error returned by handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("not found")]
    NotFound,

    #[error("system error: {0}")]
    System(#[source] BoxError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Wrap any error as an internal fault
    pub fn system(err: impl Into<BoxError>) -> Self {
        AppError::System(err.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::NotFound => ErrorCode::NotFound,
            AppError::System(_) => ErrorCode::System,
        }
    }

    /// Body written for this error
    pub fn to_error_response(&self) -> ErrorResponse {
        let code = self.code();
        let (message, developer_message) = match self {
            AppError::BadRequest(msg) => (msg.clone(), code.default_message().to_string()),
            AppError::NotFound => (code.default_message().to_string(), String::new()),
            AppError::System(source) => (code.default_message().to_string(), source.to_string()),
        };

        ErrorResponse {
            message,
            developer_message,
            code,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();

        match &self {
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = %code, "Bad request: {}", msg);
            }
            AppError::NotFound => {
                tracing::info!(error_code = %code, "Not found");
            }
            AppError::System(source) => {
                tracing::error!(error_code = %code, error = %source, "System error");
            }
        }

        (code.status(), Json(self.to_error_response())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"message": "not found", "developer_message": "", "code": "404"})
        );
    }

    #[tokio::test]
    async fn test_bad_request_response() {
        let response = AppError::BadRequest("email is empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"message": "email is empty", "developer_message": "bad request", "code": "400"})
        );
    }

    #[tokio::test]
    async fn test_system_response_hides_cause_from_message() {
        let cause = std::io::Error::other("connection reset by peer");
        let response = AppError::system(cause).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "system error");
        assert_eq!(body["code"], "500");
        assert!(
            body["developer_message"]
                .as_str()
                .unwrap()
                .contains("connection reset by peer")
        );
    }

    #[test]
    fn test_system_error_keeps_source() {
        let err = AppError::system(std::io::Error::other("boom"));
        assert!(err.source().is_some());
    }
}
