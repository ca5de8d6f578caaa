use std::time::Duration;

/// Unified database error type for all database operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// MongoDB driver errors
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Initial handshake or liveness probe failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The store did not answer within the allotted time
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
