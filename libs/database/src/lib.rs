//! Database library providing document-store connectors and utilities
//!
//! # Features
//!
//! - `mongodb` - MongoDB support
//! - `all` - All database features
//!
//! # Examples
//!
//! ## MongoDB
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::with_database("localhost", 27017, "mydb");
//! let client = mongodb::connect(&config).await?;
//! let db = client.database(config.database());
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};
