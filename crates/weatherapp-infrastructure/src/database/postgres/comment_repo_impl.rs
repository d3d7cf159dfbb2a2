// ============================================================================
// WeatherApp Infrastructure - PostgreSQL Comment Repository
// File: crates/weatherapp-infrastructure/src/database/postgres/comment_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use weatherapp_core::domain::{Comment, NewComment, Page};
use weatherapp_core::error::DomainError;
use weatherapp_core::repositories::CommentRepository;
use weatherapp_shared::UserId;

use super::db_error;

pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub location_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            user_id: row.user_id,
            username: row.username,
            location_name: row.location_name,
            content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
            is_active: row.is_active,
        }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, DomainError> {
        let row: Option<CommentRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, username, location_name, content,
                   created_at, updated_at, is_active
            FROM comments
            WHERE id = $1 AND is_active
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding comment by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_location(&self, location_name: &str, page: Page) -> Result<Vec<Comment>, DomainError> {
        let rows: Vec<CommentRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, username, location_name, content,
                   created_at, updated_at, is_active
            FROM comments
            WHERE location_name = $1 AND is_active
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#
        )
        .bind(location_name)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing comments by location", e))?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn find_by_user(&self, user_id: UserId, page: Page) -> Result<Vec<Comment>, DomainError> {
        let rows: Vec<CommentRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, username, location_name, content,
                   created_at, updated_at, is_active
            FROM comments
            WHERE user_id = $1 AND is_active
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#
        )
        .bind(user_id)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing comments by user", e))?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn count_by_location(&self, location_name: &str) -> Result<i64, DomainError> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM comments WHERE location_name = $1 AND is_active"
        )
        .bind(location_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("counting comments", e))
    }

    async fn create(&self, comment: &NewComment) -> Result<Comment, DomainError> {
        let row: CommentRow = sqlx::query_as(
            r#"
            INSERT INTO comments (user_id, username, location_name, content, created_at, is_active)
            VALUES ($1, $2, $3, $4, $5, TRUE)
            RETURNING id, user_id, username, location_name, content,
                      created_at, updated_at, is_active
            "#
        )
        .bind(comment.user_id)
        .bind(&comment.username)
        .bind(&comment.location_name)
        .bind(&comment.content)
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating comment", e))?;

        Ok(row.into())
    }

    async fn update(&self, comment: &Comment) -> Result<Comment, DomainError> {
        let row: Option<CommentRow> = sqlx::query_as(
            r#"
            UPDATE comments
            SET content = $2, updated_at = $3
            WHERE id = $1 AND is_active
            RETURNING id, user_id, username, location_name, content,
                      created_at, updated_at, is_active
            "#
        )
        .bind(comment.id)
        .bind(&comment.content)
        .bind(comment.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating comment", e))?;

        row.map(|r| r.into()).ok_or(DomainError::CommentNotFound)
    }

    async fn delete(&self, id: i64, user_id: UserId) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE comments
            SET is_active = FALSE
            WHERE id = $1 AND user_id = $2 AND is_active
            "#
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("deleting comment", e))?;

        Ok(result.rows_affected() > 0)
    }
}
