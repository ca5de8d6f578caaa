//! JSON body extractor that reports decoding failures as bad requests.

use crate::errors::AppError;
use axum::body::Bytes;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Message returned when a request body cannot be decoded.
pub const INVALID_JSON_MESSAGE: &str = "invalid JSON scheme. check swagger API";

/// Extractor for JSON request bodies.
///
/// The body is decoded whatever the `Content-Type` header says. Syntax errors
/// and wrong field types become [`AppError::BadRequest`] before the handler runs.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create_user(JsonBody(dto): JsonBody<CreateUserDto>) -> AppResult<String> {
///     Ok(dto.username)
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "Failed to read request body");
            AppError::BadRequest(rejection.body_text())
        })?;

        let Json(data) = Json::<T>::from_bytes(&bytes).map_err(|rejection| {
            tracing::debug!(%rejection, "Rejected request body");
            AppError::BadRequest(INVALID_JSON_MESSAGE.to_string())
        })?;

        Ok(JsonBody(data))
    }
}
