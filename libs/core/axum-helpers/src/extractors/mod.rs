//! Custom extractors for Axum handlers.
//!
//! Rejections are [`AppError`](crate::AppError)s, so a malformed request is
//! answered by the same error middleware as any handler failure.

pub mod id_path;
pub mod json_body;

pub use id_path::IdPath;
pub use json_body::{INVALID_JSON_MESSAGE, JsonBody};
