//! Domain errors

use thiserror::Error;
use weatherapp_security::PasswordError;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found")]
    UserNotFound,

    #[error("Comment not found")]
    CommentNotFound,

    #[error("Chat message not found")]
    ChatMessageNotFound,
    
    #[error("Invalid username or password")]
    InvalidCredentials,
    
    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),
    
    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),
    
    #[error("Refresh token not found")]
    RefreshTokenNotFound,
    
    #[error("Refresh token expired")]
    RefreshTokenExpired,
    
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    
    #[error("Password must be at most {0} characters")]
    PasswordTooLong(usize),
    
    #[error("Password hash error: {0}")]
    PasswordHashError(String),
    
    #[error("Token generation error: {0}")]
    TokenGenerationError(String),
    
    #[error("Validation error: {0}")]
    ValidationError(String),
    
    #[error("Database error: {0}")]
    DatabaseError(String),
    
    #[error("Session store error: {0}")]
    CacheError(String),
    
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Refresh failures are reported to clients without saying which one happened.
    pub fn is_invalid_refresh_token(&self) -> bool {
        matches!(self, DomainError::RefreshTokenNotFound | DomainError::RefreshTokenExpired)
    }
}

impl From<PasswordError> for DomainError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::TooShort(n) => DomainError::PasswordTooShort(n),
            PasswordError::TooLong(n) => DomainError::PasswordTooLong(n),
            PasswordError::HashError(msg) => DomainError::PasswordHashError(msg),
        }
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
