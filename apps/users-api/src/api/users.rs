//! Users API routes
//!
//! This module wires up the users domain to HTTP routes.

use axum::Router;
use domain_users::{DefaultUserService, MongoUserRepository, handlers};

use crate::state::AppState;

/// Create users router
pub fn router(state: &AppState) -> Router {
    let repository = MongoUserRepository::new(&state.db, state.config.mongodb.collection());

    // One deadline per request, taken from the listener's read/write timeouts
    let service = DefaultUserService::new(repository)
        .with_request_timeout(state.config.listen.request_timeout());

    handlers::router(service)
}
