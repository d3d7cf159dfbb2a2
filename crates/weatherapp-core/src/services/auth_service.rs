// ============================================================================
// WeatherApp Core - Authentication Service
// File: crates/weatherapp-core/src/services/auth_service.rs
// ============================================================================
//! Authentication service with login, register, and token management

use std::sync::Arc;
use tracing::{info, warn};

use weatherapp_security::PasswordService;
use weatherapp_shared::utils::mask_email;

use crate::domain::{NewUser, TokenPair, User, UserProfile};
use crate::error::DomainError;
use crate::repositories::UserRepository;
use crate::services::token_service::TokenService;

/// Authentication service for handling user login/register flows
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
}

/// Registration input
#[derive(Debug, Clone)]
pub struct RegisterCommand {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Result of a successful login, registration or refresh
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub user: UserProfile,
    pub access_token: String,
    pub refresh_token: String,
}

impl AuthResult {
    fn new(user: &User, tokens: TokenPair) -> Self {
        Self {
            user: UserProfile::from(user),
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

impl AuthService {
    pub fn new(user_repo: Arc<dyn UserRepository>, tokens: Arc<TokenService>) -> Self {
        Self { user_repo, tokens }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Login with username and password
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResult, DomainError> {
        info!("Login attempt for username: {}", username);

        // 1. Find user; unknown users and bad passwords look the same to the caller
        let user = self.user_repo.find_by_username(username.trim()).await?
            .ok_or_else(|| {
                warn!("Login failed: unknown username: {}", username);
                DomainError::InvalidCredentials
            })?;

        // 2. Verify password
        let password_valid = PasswordService::verify(password, &user.password_hash)
            .map_err(|e| {
                warn!("Login failed: unreadable password hash for user {}: {}", user.id, e);
                DomainError::InvalidCredentials
            })?;

        if !password_valid {
            warn!("Login failed: invalid password for: {}", username);
            return Err(DomainError::InvalidCredentials);
        }

        // 3. Issue tokens
        let tokens = self.tokens.issue_token_pair(&user).await?;

        info!("Login successful for: {}", username);
        Ok(AuthResult::new(&user, tokens))
    }

    /// Register a new user and sign them in
    pub async fn register(&self, cmd: RegisterCommand) -> Result<AuthResult, DomainError> {
        info!("Registration attempt for username: {}", cmd.username);

        // 1. Password policy
        PasswordService::check_policy(&cmd.password)?;

        // 2. Uniqueness checks (the store enforces them again on insert)
        if self.user_repo.find_by_username(cmd.username.trim()).await?.is_some() {
            warn!("Registration failed: username already exists: {}", cmd.username);
            return Err(DomainError::UsernameAlreadyExists(cmd.username.trim().to_string()));
        }

        let email = cmd.email.trim().to_lowercase();
        if self.user_repo.find_by_email(&email).await?.is_some() {
            warn!("Registration failed: email already exists: {}", mask_email(&email));
            return Err(DomainError::EmailAlreadyExists(email));
        }

        // 3. Hash password
        let password_hash = PasswordService::hash(&cmd.password)?;

        // 4. Build and store the user
        let new_user = NewUser::new(
            &cmd.username,
            &email,
            password_hash,
            cmd.first_name,
            cmd.last_name,
        )?;
        let user = self.user_repo.create(&new_user).await?;

        // 5. Issue tokens
        let tokens = self.tokens.issue_token_pair(&user).await?;

        info!("Registration successful for: {} (id {})", user.username, user.id);
        Ok(AuthResult::new(&user, tokens))
    }

    /// Exchange a refresh token for a new token pair
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthResult, DomainError> {
        let result = self.tokens.refresh(refresh_token).await?;
        Ok(AuthResult::new(&result.user, result.tokens))
    }

    pub async fn revoke(&self, refresh_token: &str) -> Result<bool, DomainError> {
        self.tokens.revoke(refresh_token).await
    }

    /// Whether `access_token` currently verifies
    pub fn validate(&self, access_token: &str) -> bool {
        self.tokens.validate_access_token(access_token).is_ok()
    }
}
