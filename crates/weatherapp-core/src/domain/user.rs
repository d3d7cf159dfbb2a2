// ============================================================================
// WeatherApp Core - User Entity
// File: crates/weatherapp-core/src/domain/user.rs
// Description: Credential record owned by the user store
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use weatherapp_shared::UserId;

/// Persisted user. Lookups only ever return active users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

impl User {
    /// Replace the editable profile fields
    pub fn update_profile(
        &mut self,
        first_name: Option<String>,
        last_name: Option<String>,
        avatar: Option<String>,
    ) {
        self.first_name = normalize(first_name);
        self.last_name = normalize(last_name);
        self.avatar = normalize(avatar);
        self.updated_at = Utc::now();
    }

    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}

/// A user that has not been stored yet; the store assigns the id.
#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    pub password_hash: String,

    #[validate(length(max = 100, message = "First name too long"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "Last name too long"))]
    pub last_name: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: &str,
        email: &str,
        password_hash: String,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let user = Self {
            username: username.trim().to_string(),
            email: email.trim().to_lowercase(),
            password_hash,
            first_name: normalize(first_name),
            last_name: normalize(last_name),
            created_at: Utc::now(),
        };

        user.validate()?;
        Ok(user)
    }

    /// Materialise with a store-assigned id
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            avatar: None,
            created_at: self.created_at,
            updated_at: self.created_at,
            is_active: true,
        }
    }
}

/// Public view of a user, echoed back by auth and profile endpoints.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            avatar: user.avatar.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
