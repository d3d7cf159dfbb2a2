//! Refresh-token store trait (port)

use async_trait::async_trait;
use crate::domain::RefreshTokenEntry;
use crate::error::DomainError;

/// Key-value table of live refresh tokens.
///
/// Implementations must make `take` and `remove` atomic per key: when several
/// callers race on the same token exactly one of them observes the entry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Insert or overwrite.
    async fn put(&self, token: &str, entry: RefreshTokenEntry) -> Result<(), DomainError>;
    async fn get(&self, token: &str) -> Result<Option<RefreshTokenEntry>, DomainError>;
    /// Remove, returning whether an entry existed.
    async fn remove(&self, token: &str) -> Result<bool, DomainError>;
    /// Remove and return the entry in one step.
    async fn take(&self, token: &str) -> Result<Option<RefreshTokenEntry>, DomainError>;
}
