//! String path parameter extractor whose rejections go through [`AppError`].

use crate::errors::AppError;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

/// Extractor for a single string path parameter, such as `{id}`.
///
/// Unlike a bare [`Path<String>`], a parameter that cannot be decoded (for
/// example invalid percent-encoded UTF-8) is answered with the standard
/// error body instead of axum's plain-text rejection.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_user(IdPath(id): IdPath) -> String {
///     format!("User ID: {id}")
/// }
///
/// let app = Router::new().route("/users/{id}", get(get_user));
/// ```
pub struct IdPath(pub String);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "Rejected path parameter");
                AppError::BadRequest(format!("invalid path parameter: {}", rejection.body_text()))
            })?;

        Ok(IdPath(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, extract::Request, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn echo(IdPath(id): IdPath) -> String {
        id
    }

    fn app() -> Router {
        Router::new().route("/items/{id}", get(echo))
    }

    fn get_request(uri: &str) -> Request {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_extracts_parameter() {
        let response = app().oneshot(get_request("/items/abc123")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"abc123");
    }

    #[tokio::test]
    async fn test_invalid_utf8_uses_error_body() {
        let response = app().oneshot(get_request("/items/%FF")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "400");
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("invalid path parameter")
        );
    }
}
