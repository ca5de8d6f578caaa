//! User Service - Business logic layer

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUserDto, UpdateUserDto, User};
use crate::repository::UserRepository;

/// Deadline for one service call when none is configured
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Operations exposed to the HTTP layer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate, hash the password and store a new user. Returns its identifier.
    async fn create(&self, dto: CreateUserDto) -> UserResult<String>;

    async fn find_one(&self, id: &str) -> UserResult<User>;

    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// Partial update; `dto.id` selects the user
    async fn update(&self, dto: UpdateUserDto) -> UserResult<()>;

    async fn delete(&self, id: &str) -> UserResult<()>;
}

/// [`UserService`] backed by a [`UserRepository`]
///
/// Each call runs under a single deadline covering every repository round
/// trip and password hash it makes. Repository errors other than `NotFound`
/// are wrapped with the failing operation, keeping the original error as
/// the source.
pub struct DefaultUserService<R: UserRepository> {
    repository: Arc<R>,
    request_timeout: Duration,
}

impl<R: UserRepository> DefaultUserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Required fields, checked in order; the first empty one is reported
    fn validate_create(dto: &CreateUserDto) -> UserResult<()> {
        if dto.password.is_empty() {
            return Err(UserError::Validation("password is empty".to_string()));
        }
        if dto.email.is_empty() {
            return Err(UserError::Validation("email is empty".to_string()));
        }
        if dto.username.is_empty() {
            return Err(UserError::Validation("username is empty".to_string()));
        }
        Ok(())
    }

    async fn within_deadline<T>(
        &self,
        context: &'static str,
        operation: impl Future<Output = UserResult<T>>,
    ) -> UserResult<T> {
        tokio::time::timeout(self.request_timeout, operation)
            .await
            .map_err(|_| UserError::Timeout.context(context))?
    }

    async fn create_user(&self, dto: CreateUserDto) -> UserResult<String> {
        let password_hash = hash_password_blocking(dto.password.clone())
            .await
            .map_err(|e| e.context("failed to create user"))?;
        let user = User {
            password_hash,
            ..User::from(dto)
        };

        self.repository
            .create(user)
            .await
            .map_err(|e| e.context("failed to create user"))
    }

    async fn update_user(&self, mut dto: UpdateUserDto) -> UserResult<()> {
        if dto.wants_password_change() {
            let current = self
                .repository
                .find_one(&dto.id)
                .await
                .map_err(|e| e.context("failed to find user by id"))?;

            let matches =
                verify_password_blocking(std::mem::take(&mut dto.old_password), current.password_hash)
                    .await
                    .map_err(|e| e.context("failed to update user"))?;
            if !matches {
                return Err(UserError::Validation(
                    "old password does not match current password".to_string(),
                ));
            }

            dto.password = std::mem::take(&mut dto.new_password);
        }

        // An empty password means "keep the stored hash".
        let password_hash = if dto.password.is_empty() {
            String::new()
        } else {
            hash_password_blocking(dto.password)
                .await
                .map_err(|e| e.context("failed to update user"))?
        };

        let user = User {
            id: dto.id,
            username: dto.username,
            email: dto.email,
            password_hash,
        };

        self.repository
            .update(user)
            .await
            .map_err(|e| e.context("failed to update user"))
    }
}

impl<R: UserRepository> Clone for DefaultUserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            request_timeout: self.request_timeout,
        }
    }
}

#[async_trait]
impl<R: UserRepository> UserService for DefaultUserService<R> {
    #[instrument(skip(self, dto), fields(username = %dto.username))]
    async fn create(&self, dto: CreateUserDto) -> UserResult<String> {
        Self::validate_create(&dto)?;

        self.within_deadline("failed to create user", self.create_user(dto))
            .await
    }

    #[instrument(skip(self))]
    async fn find_one(&self, id: &str) -> UserResult<User> {
        self.within_deadline("failed to find user by id", async {
            self.repository
                .find_one(id)
                .await
                .map_err(|e| e.context("failed to find user by id"))
        })
        .await
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> UserResult<Vec<User>> {
        self.within_deadline("failed to find users", async {
            self.repository
                .find_all()
                .await
                .map_err(|e| e.context("failed to find users"))
        })
        .await
    }

    #[instrument(skip(self, dto), fields(user_id = %dto.id))]
    async fn update(&self, dto: UpdateUserDto) -> UserResult<()> {
        self.within_deadline("failed to update user", self.update_user(dto))
            .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> UserResult<()> {
        self.within_deadline("failed to delete user", async {
            self.repository
                .delete(id)
                .await
                .map_err(|e| e.context("failed to delete user"))
        })
        .await
    }
}

/// Argon2id PHC string for `password`
pub fn hash_password(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}

/// Whether `password` matches the PHC string `hash`
pub fn verify_password(password: &str, hash: &str) -> UserResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

// Argon2 is CPU-bound; keep it off the async worker threads.
async fn hash_password_blocking(password: String) -> UserResult<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| UserError::Internal(format!("password hashing task failed: {e}")))?
}

async fn verify_password_blocking(password: String, hash: String) -> UserResult<bool> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| UserError::Internal(format!("password verification task failed: {e}")))?
}
