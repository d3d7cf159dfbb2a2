//! Location comment repository trait (port)

use async_trait::async_trait;
use weatherapp_shared::UserId;
use crate::domain::{Comment, NewComment, Page};
use crate::error::DomainError;

/// Listings are newest first and skip soft-deleted comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, DomainError>;
    async fn find_by_location(&self, location_name: &str, page: Page) -> Result<Vec<Comment>, DomainError>;
    async fn find_by_user(&self, user_id: UserId, page: Page) -> Result<Vec<Comment>, DomainError>;
    async fn count_by_location(&self, location_name: &str) -> Result<i64, DomainError>;
    async fn create(&self, comment: &NewComment) -> Result<Comment, DomainError>;
    /// Persists new content. `CommentNotFound` if the comment is gone.
    async fn update(&self, comment: &Comment) -> Result<Comment, DomainError>;
    /// Soft delete, only when `user_id` owns the comment.
    async fn delete(&self, id: i64, user_id: UserId) -> Result<bool, DomainError>;
}
