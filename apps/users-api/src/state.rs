//! Application state management.
//!
//! Built once in `main` and handed to the route builders; nothing here is global.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloning is cheap: the MongoDB client shares one connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded at startup
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// Database holding the users collection
    pub db: Database,
}
