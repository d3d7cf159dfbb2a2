//! Location comments

use std::sync::Arc;
use tracing::{info, warn};

use weatherapp_shared::UserId;

use crate::domain::{Comment, NewComment, Page};
use crate::error::DomainError;
use crate::repositories::CommentRepository;

pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
}

#[derive(Debug, Clone)]
pub struct CreateCommentCommand {
    pub location_name: String,
    pub content: String,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepository>) -> Self {
        Self { comments }
    }

    pub async fn list_by_location(
        &self,
        location_name: &str,
        page: Page,
    ) -> Result<Vec<Comment>, DomainError> {
        self.comments.find_by_location(location_name.trim(), page).await
    }

    pub async fn count_by_location(&self, location_name: &str) -> Result<i64, DomainError> {
        self.comments.count_by_location(location_name.trim()).await
    }

    pub async fn list_by_user(&self, user_id: UserId, page: Page) -> Result<Vec<Comment>, DomainError> {
        self.comments.find_by_user(user_id, page).await
    }

    pub async fn create(
        &self,
        user_id: UserId,
        username: &str,
        cmd: CreateCommentCommand,
    ) -> Result<Comment, DomainError> {
        let new_comment = NewComment::new(user_id, username, &cmd.location_name, &cmd.content)?;
        let comment = self.comments.create(&new_comment).await?;

        info!("Comment {} added to '{}' by user {}", comment.id, comment.location_name, user_id);
        Ok(comment)
    }

    /// Someone else's comment is reported as `CommentNotFound`.
    pub async fn update(
        &self,
        comment_id: i64,
        user_id: UserId,
        content: &str,
    ) -> Result<Comment, DomainError> {
        let mut comment = self.comments.find_by_id(comment_id).await?
            .ok_or(DomainError::CommentNotFound)?;

        if !comment.is_owned_by(user_id) {
            warn!("User {} tried to edit comment {} owned by {}", user_id, comment_id, comment.user_id);
            return Err(DomainError::CommentNotFound);
        }

        comment.edit(content)?;
        self.comments.update(&comment).await
    }

    pub async fn delete(&self, comment_id: i64, user_id: UserId) -> Result<(), DomainError> {
        if !self.comments.delete(comment_id, user_id).await? {
            return Err(DomainError::CommentNotFound);
        }
        info!("Comment {} deleted by user {}", comment_id, user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockCommentRepository;

    fn stored(id: i64, owner: UserId) -> Comment {
        NewComment::new(owner, "alice", "Jakarta", "hot today")
            .unwrap()
            .into_comment(id)
    }

    #[tokio::test]
    async fn test_create_trims_and_stores() {
        let mut repo = MockCommentRepository::new();
        repo.expect_create()
            .withf(|c: &NewComment| c.location_name == "Jakarta" && c.content == "hot today" && c.username == "alice")
            .times(1)
            .returning(|c: &NewComment| Ok(c.clone().into_comment(1)));

        let svc = CommentService::new(Arc::new(repo));
        let comment = svc
            .create(
                7,
                "alice",
                CreateCommentCommand {
                    location_name: " Jakarta ".to_string(),
                    content: "hot today  ".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(comment.id, 1);
        assert_eq!(comment.user_id, 7);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_content() {
        let mut repo = MockCommentRepository::new();
        repo.expect_create().never();

        let svc = CommentService::new(Arc::new(repo));
        let err = svc
            .create(
                7,
                "alice",
                CreateCommentCommand {
                    location_name: "Jakarta".to_string(),
                    content: "   ".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_update_by_owner() {
        let mut repo = MockCommentRepository::new();
        repo.expect_find_by_id().returning(|id| Ok(Some(stored(id, 7))));
        repo.expect_update()
            .withf(|c: &Comment| c.content == "rain now" && c.updated_at.is_some())
            .times(1)
            .returning(|c: &Comment| Ok(c.clone()));

        let svc = CommentService::new(Arc::new(repo));
        let comment = svc.update(1, 7, "rain now").await.unwrap();
        assert_eq!(comment.content, "rain now");
    }

    #[tokio::test]
    async fn test_update_by_stranger_is_not_found() {
        let mut repo = MockCommentRepository::new();
        repo.expect_find_by_id().returning(|id| Ok(Some(stored(id, 7))));
        repo.expect_update().never();

        let svc = CommentService::new(Arc::new(repo));
        let err = svc.update(1, 8, "mine now").await.unwrap_err();
        assert!(matches!(err, DomainError::CommentNotFound));
    }

    #[tokio::test]
    async fn test_update_missing() {
        let mut repo = MockCommentRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let svc = CommentService::new(Arc::new(repo));
        assert!(matches!(svc.update(5, 7, "x").await, Err(DomainError::CommentNotFound)));
    }

    #[tokio::test]
    async fn test_delete_passes_owner() {
        let mut repo = MockCommentRepository::new();
        repo.expect_delete()
            .withf(|id, user_id| *id == 1 && *user_id == 7)
            .times(1)
            .returning(|_, _| Ok(true));
        repo.expect_delete()
            .withf(|_, user_id| *user_id != 7)
            .returning(|_, _| Ok(false));

        let svc = CommentService::new(Arc::new(repo));
        svc.delete(1, 7).await.unwrap();
        assert!(matches!(svc.delete(1, 8).await, Err(DomainError::CommentNotFound)));
    }

    #[tokio::test]
    async fn test_location_lookups_are_trimmed() {
        let mut repo = MockCommentRepository::new();
        repo.expect_find_by_location()
            .withf(|location: &str, page: &Page| location == "Bandung" && *page == Page::default())
            .returning(|_, _| Ok(vec![]));
        repo.expect_count_by_location()
            .withf(|location: &str| location == "Bandung")
            .returning(|_| Ok(4));

        let svc = CommentService::new(Arc::new(repo));
        assert!(svc.list_by_location(" Bandung", Page::default()).await.unwrap().is_empty());
        assert_eq!(svc.count_by_location("Bandung ").await.unwrap(), 4);
    }
}
