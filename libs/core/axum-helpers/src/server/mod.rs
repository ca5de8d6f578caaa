//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with OpenAPI documentation and request tracing
//! - TCP or Unix domain socket listeners selected by configuration
//! - Health endpoints
//! - Graceful shutdown

pub mod app;
pub mod health;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::{BoundListener, bind, create_router, serve};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::shutdown_signal;
