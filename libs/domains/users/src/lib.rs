//! Users Domain
//!
//! CRUD over user accounts stored in a MongoDB collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, JSON decoding, status codes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Required fields, password check, hashing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! Errors travel up as [`UserError`]. The service adds context to everything
//! except `NotFound`, and [`axum_helpers::AppError`] turns the root cause
//! into a 400, 404 or 500.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{handlers, DefaultUserService, MongoUserRepository};
//! use mongodb::Client;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("service");
//!
//! let repository = MongoUserRepository::new(&db, "users");
//! let service = DefaultUserService::new(repository)
//!     .with_request_timeout(Duration::from_secs(10));
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{CreateUserDto, UpdateUserDto, User};
pub use mongodb::MongoUserRepository;
pub use repository::UserRepository;
pub use service::{DefaultUserService, UserService};
