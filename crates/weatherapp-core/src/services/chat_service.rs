//! Global chat room

use std::sync::Arc;
use tracing::info;

use weatherapp_shared::UserId;

use crate::domain::{ChatMessage, NewChatMessage, Page};
use crate::error::DomainError;
use crate::repositories::ChatRepository;

pub struct ChatService {
    messages: Arc<dyn ChatRepository>,
}

impl ChatService {
    pub fn new(messages: Arc<dyn ChatRepository>) -> Self {
        Self { messages }
    }

    /// The newest page of messages, returned oldest first for display.
    pub async fn recent(&self, page: Page) -> Result<Vec<ChatMessage>, DomainError> {
        let mut messages = self.messages.find_recent(page).await?;
        messages.reverse();
        Ok(messages)
    }

    pub async fn count(&self) -> Result<i64, DomainError> {
        self.messages.count().await
    }

    pub async fn list_by_user(&self, user_id: UserId, page: Page) -> Result<Vec<ChatMessage>, DomainError> {
        self.messages.find_by_user(user_id, page).await
    }

    pub async fn send(
        &self,
        user_id: UserId,
        username: &str,
        message: &str,
    ) -> Result<ChatMessage, DomainError> {
        let new_message = NewChatMessage::new(user_id, username, message)?;
        let stored = self.messages.create(&new_message).await?;

        info!("Chat message {} sent by user {}", stored.id, user_id);
        Ok(stored)
    }

    /// Only the sender may delete; anything else is `ChatMessageNotFound`.
    pub async fn delete(&self, message_id: i64, user_id: UserId) -> Result<(), DomainError> {
        if !self.messages.delete(message_id, user_id).await? {
            return Err(DomainError::ChatMessageNotFound);
        }
        info!("Chat message {} deleted by user {}", message_id, user_id);
        Ok(())
    }
}
