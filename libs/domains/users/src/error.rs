use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("store operation timed out")]
    Timeout,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Internal error: {0}")]
    Internal(String),

    /// A lower-level error annotated with what the service was doing.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<UserError>,
    },
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    /// Wrap with call context. `NotFound` passes through unchanged.
    pub fn context(self, context: impl Into<String>) -> Self {
        match self {
            UserError::NotFound => UserError::NotFound,
            other => UserError::Context {
                context: context.into(),
                source: Box::new(other),
            },
        }
    }

    /// Innermost error of a context chain
    pub fn root(&self) -> &UserError {
        let mut current = self;
        while let UserError::Context { source, .. } = current {
            current = source;
        }
        current
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), UserError::NotFound)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.root(), UserError::Validation(_))
    }
}

/// Classification follows the root cause, so context never turns a 400 into a 500
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err.root() {
            UserError::NotFound => return AppError::NotFound,
            UserError::Validation(msg) => return AppError::BadRequest(msg.clone()),
            _ => {}
        }
        AppError::system(err)
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
