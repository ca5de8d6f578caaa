//! API routes module
//!
//! This module defines all HTTP API routes for the users service.

pub mod health;
pub mod users;

use axum::Router;
use axum_helpers::health_router;
use core_config::app_info;

use crate::state::AppState;

/// Create all API routes: `/users`, `/health` and `/ready`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(users::router(state))
        .merge(health::router(state.clone()))
        .merge(health_router(app_info!()))
}
