//! Chat message repository trait (port)

use async_trait::async_trait;
use weatherapp_shared::UserId;
use crate::domain::{ChatMessage, NewChatMessage, Page};
use crate::error::DomainError;

/// Listings are newest first and skip soft-deleted messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRepository: Send + Sync {
    async fn find_recent(&self, page: Page) -> Result<Vec<ChatMessage>, DomainError>;
    async fn find_by_user(&self, user_id: UserId, page: Page) -> Result<Vec<ChatMessage>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn create(&self, message: &NewChatMessage) -> Result<ChatMessage, DomainError>;
    /// Soft delete, only when `user_id` sent the message.
    async fn delete(&self, id: i64, user_id: UserId) -> Result<bool, DomainError>;
}
