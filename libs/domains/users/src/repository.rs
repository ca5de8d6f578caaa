use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::User;

/// Repository trait for User persistence
///
/// Identifiers are the textual form of the store's primary key. A malformed
/// identifier fails with `UserError::Validation`; a well-formed one that
/// matches nothing fails with `UserError::NotFound`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the identifier assigned by the store
    async fn create(&self, user: User) -> UserResult<String>;

    /// Get a user by identifier
    async fn find_one(&self, id: &str) -> UserResult<User>;

    /// Every stored user, unpaginated
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// Patch the non-empty fields of `user` onto the stored document `user.id`
    async fn update(&self, user: User) -> UserResult<()>;

    async fn delete(&self, id: &str) -> UserResult<()>;
}
