//! Refresh-token table entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use weatherapp_shared::UserId;

/// What a refresh token string maps to in the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenEntry {
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
}

impl RefreshTokenEntry {
    pub fn new(user_id: UserId, expires_at: DateTime<Utc>) -> Self {
        Self { user_id, expires_at }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Access + refresh token pair handed to clients.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
