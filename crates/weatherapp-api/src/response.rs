//! Response envelopes

use chrono::Utc;
use serde::Serialize;

use weatherapp_core::services::AuthResult;
use weatherapp_core::UserProfile;

/// Generic envelope used by the profile, comment and chat endpoints.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub timestamp: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: &str) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.to_string()),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Payload of the `count` endpoints
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: i64,
}

/// Body of every `/api/auth/*` call except `validate`.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

impl AuthResponse {
    pub fn signed_in(result: AuthResult, message: &str) -> Self {
        Self {
            success: true,
            token: Some(result.access_token),
            refresh_token: Some(result.refresh_token),
            message: message.to_string(),
            user: Some(result.user),
        }
    }

    /// No tokens attached
    pub fn outcome(success: bool, message: &str) -> Self {
        Self {
            success,
            token: None,
            refresh_token: None,
            message: message.to_string(),
            user: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub success: bool,
    pub is_valid: bool,
    pub message: String,
}

impl ValidateResponse {
    pub fn new(is_valid: bool) -> Self {
        let message = if is_valid { "Token is valid" } else { "Token is invalid" };
        Self {
            success: true,
            is_valid,
            message: message.to_string(),
        }
    }
}
