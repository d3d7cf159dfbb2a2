//! User repository trait (port)

use async_trait::async_trait;
use weatherapp_shared::UserId;
use crate::domain::{NewUser, User};
use crate::error::DomainError;

/// Credential store. Every lookup ignores soft-deleted users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    /// Fails with `UsernameAlreadyExists`/`EmailAlreadyExists` on a uniqueness conflict.
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
    async fn update(&self, user: &User) -> Result<User, DomainError>;
    /// Soft delete. Returns whether an active user was deactivated.
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;
}
