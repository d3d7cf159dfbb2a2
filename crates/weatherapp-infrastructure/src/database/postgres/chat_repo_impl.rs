// ============================================================================
// WeatherApp Infrastructure - PostgreSQL Chat Repository
// File: crates/weatherapp-infrastructure/src/database/postgres/chat_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use weatherapp_core::domain::{ChatMessage, NewChatMessage, Page};
use weatherapp_core::error::DomainError;
use weatherapp_core::repositories::ChatRepository;
use weatherapp_shared::UserId;

use super::db_error;

pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ChatMessageRow {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<ChatMessageRow> for ChatMessage {
    fn from(row: ChatMessageRow) -> Self {
        ChatMessage {
            id: row.id,
            user_id: row.user_id,
            username: row.username,
            message: row.message,
            created_at: row.created_at,
            is_active: row.is_active,
        }
    }
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    async fn find_recent(&self, page: Page) -> Result<Vec<ChatMessage>, DomainError> {
        let rows: Vec<ChatMessageRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, username, message, created_at, is_active
            FROM chat_messages
            WHERE is_active
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing chat messages", e))?;

        Ok(rows.into_iter().map(ChatMessage::from).collect())
    }

    async fn find_by_user(&self, user_id: UserId, page: Page) -> Result<Vec<ChatMessage>, DomainError> {
        let rows: Vec<ChatMessageRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, username, message, created_at, is_active
            FROM chat_messages
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
        .map_err(|e| db_error("listing chat messages by user", e))?;

        Ok(rows.into_iter().map(ChatMessage::from).collect())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM chat_messages WHERE is_active")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("counting chat messages", e))
    }

    async fn create(&self, message: &NewChatMessage) -> Result<ChatMessage, DomainError> {
        let row: ChatMessageRow = sqlx::query_as(
            r#"
            INSERT INTO chat_messages (user_id, username, message, created_at, is_active)
            VALUES ($1, $2, $3, $4, TRUE)
            RETURNING id, user_id, username, message, created_at, is_active
            "#
        )
        .bind(message.user_id)
        .bind(&message.username)
        .bind(&message.message)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating chat message", e))?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64, user_id: UserId) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE chat_messages SET is_active = FALSE WHERE id = $1 AND user_id = $2 AND is_active"
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("deleting chat message", e))?;

        Ok(result.rows_affected() > 0)
    }
}
