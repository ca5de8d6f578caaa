//! # Axum Helpers
//!
//! Utilities shared by the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: the error middleware. Handlers return [`AppError`] (or a
//!   domain error convertible into it) and this module alone turns the error
//!   classification into a status code and a JSON body.
//! - **[`extractors`]**: request extractors whose rejections are [`AppError`]s
//! - **[`server`]**: router assembly, TCP/Unix listeners, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_router, serve};
//! use core_config::server::ServerConfig;
//!
//! let config = ServerConfig::default();
//! let router = create_router::<ApiDoc>(api_routes, &config);
//! serve(router, &config, Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, bind, create_router, health_router, run_health_checks,
    serve, shutdown_signal,
};

// Re-export error types
pub use errors::{AppError, AppResult, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{IdPath, JsonBody};
