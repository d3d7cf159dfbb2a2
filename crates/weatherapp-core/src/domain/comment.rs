// ============================================================================
// WeatherApp Core - Location Comment
// File: crates/weatherapp-core/src/domain/comment.rs
// Description: Comments users leave on a named location
// ============================================================================

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;
use weatherapp_shared::constants::MAX_COMMENT_LENGTH;
use weatherapp_shared::UserId;

use crate::error::DomainError;

const CONTENT_LENGTH_MESSAGE: &str = "Comment must be between 1 and 1000 characters";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub user_id: UserId,
    pub username: String,
    pub location_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub is_active: bool,
}

impl Comment {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    pub fn edit(&mut self, content: &str) -> Result<(), DomainError> {
        let content = content.trim();
        if content.is_empty() || content.chars().count() > MAX_COMMENT_LENGTH {
            return Err(DomainError::ValidationError(CONTENT_LENGTH_MESSAGE.to_string()));
        }
        self.content = content.to_string();
        self.updated_at = Some(Utc::now());
        Ok(())
    }
}

#[derive(Debug, Clone, Validate)]
pub struct NewComment {
    pub user_id: UserId,
    pub username: String,

    #[validate(length(min = 1, max = 100, message = "Location name must be between 1 and 100 characters"))]
    pub location_name: String,

    #[validate(length(min = 1, max = 1000, message = "Comment must be between 1 and 1000 characters"))]
    pub content: String,

    pub created_at: DateTime<Utc>,
}

impl NewComment {
    pub fn new(
        user_id: UserId,
        username: &str,
        location_name: &str,
        content: &str,
    ) -> Result<Self, validator::ValidationErrors> {
        let comment = Self {
            user_id,
            username: username.to_string(),
            location_name: location_name.trim().to_string(),
            content: content.trim().to_string(),
            created_at: Utc::now(),
        };

        comment.validate()?;
        Ok(comment)
    }

    pub fn into_comment(self, id: i64) -> Comment {
        Comment {
            id,
            user_id: self.user_id,
            username: self.username,
            location_name: self.location_name,
            content: self.content,
            created_at: self.created_at,
            updated_at: None,
            is_active: true,
        }
    }
}
