//! Global chat room message

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;
use weatherapp_shared::UserId;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatMessage {
    pub id: i64,
    pub user_id: UserId,
    pub username: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Validate)]
pub struct NewChatMessage {
    pub user_id: UserId,
    pub username: String,

    #[validate(length(min = 1, max = 500, message = "Message must be between 1 and 500 characters"))]
    pub message: String,

    pub created_at: DateTime<Utc>,
}

impl NewChatMessage {
    pub fn new(
        user_id: UserId,
        username: &str,
        message: &str,
    ) -> Result<Self, validator::ValidationErrors> {
        let msg = Self {
            user_id,
            username: username.to_string(),
            message: message.trim().to_string(),
            created_at: Utc::now(),
        };

        msg.validate()?;
        Ok(msg)
    }

    pub fn into_message(self, id: i64) -> ChatMessage {
        ChatMessage {
            id,
            user_id: self.user_id,
            username: self.username,
            message: self.message,
            created_at: self.created_at,
            is_active: true,
        }
    }
}
