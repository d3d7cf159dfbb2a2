// ============================================================================
// WeatherApp Core - Token Service
// File: crates/weatherapp-core/src/services/token_service.rs
// ============================================================================
//! Access-token issuance/validation and refresh-token rotation.
//!
//! Refresh tokens move through `Issued -> Replaced | Revoked | Expired`. Every
//! transition out of `Issued` starts by removing the entry from the store, so a
//! token can never be spent twice. Expired entries are only noticed (and
//! dropped) when someone tries to use them.

use std::sync::Arc;
use chrono::{Duration, Utc};
use tracing::{debug, error, info, warn};

use weatherapp_security::{generate_refresh_token, Claims, JwtError, JwtService};
use weatherapp_shared::utils::token_fingerprint;
use weatherapp_shared::UserId;

use crate::domain::{RefreshTokenEntry, TokenPair, User};
use crate::error::DomainError;
use crate::repositories::{RefreshTokenStore, UserRepository};

pub struct TokenService {
    jwt: JwtService,
    store: Arc<dyn RefreshTokenStore>,
    users: Arc<dyn UserRepository>,
    refresh_token_ttl: Duration,
}

/// Outcome of a successful refresh.
#[derive(Debug, Clone)]
pub struct RefreshResult {
    pub user: User,
    pub tokens: TokenPair,
}

impl TokenService {
    pub fn new(
        jwt: JwtService,
        store: Arc<dyn RefreshTokenStore>,
        users: Arc<dyn UserRepository>,
        refresh_token_expiry_secs: i64,
    ) -> Self {
        Self {
            jwt,
            store,
            users,
            refresh_token_ttl: Duration::seconds(refresh_token_expiry_secs),
        }
    }

    pub fn issue_access_token(&self, user: &User) -> Result<String, DomainError> {
        self.jwt
            .generate_access_token(user.id, &user.username, &user.email)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))
    }

    /// Fresh opaque token. Not usable until registered.
    pub fn issue_refresh_token(&self) -> String {
        generate_refresh_token()
    }

    /// Map `token` to `user_id` for `ttl`, replacing any previous mapping.
    pub async fn register_refresh_token(
        &self,
        token: &str,
        user_id: UserId,
        ttl: Duration,
    ) -> Result<(), DomainError> {
        let entry = RefreshTokenEntry::new(user_id, Utc::now() + ttl);
        self.store.put(token, entry).await?;
        debug!("Registered refresh token {} for user {}", token_fingerprint(token), user_id);
        Ok(())
    }

    /// Access token plus a registered refresh token with the configured lifetime.
    pub async fn issue_token_pair(&self, user: &User) -> Result<TokenPair, DomainError> {
        let access_token = self.issue_access_token(user)?;
        let refresh_token = self.issue_refresh_token();
        self.register_refresh_token(&refresh_token, user.id, self.refresh_token_ttl)
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Purely cryptographic; never touches the store.
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt.validate_token(token)
    }

    /// Spend `refresh_token` for a new token pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshResult, DomainError> {
        let entry = self
            .store
            .take(refresh_token)
            .await?
            .ok_or_else(|| {
                warn!("Refresh rejected: unknown token {}", token_fingerprint(refresh_token));
                DomainError::RefreshTokenNotFound
            })?;

        if entry.is_expired() {
            warn!(
                "Refresh rejected: token {} expired at {}",
                token_fingerprint(refresh_token),
                entry.expires_at
            );
            return Err(DomainError::RefreshTokenExpired);
        }

        let user = match self.users.find_by_id(entry.user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!("Refresh rejected: user {} no longer active", entry.user_id);
                return Err(DomainError::UserNotFound);
            }
            Err(e) => {
                self.restore(refresh_token, entry).await;
                return Err(e);
            }
        };

        let tokens = match self.issue_token_pair(&user).await {
            Ok(tokens) => tokens,
            Err(e) => {
                self.restore(refresh_token, entry).await;
                return Err(e);
            }
        };
        info!("Refresh token rotated for user {}", user.id);

        Ok(RefreshResult { user, tokens })
    }

    /// Put back an entry taken by a refresh that failed on an infrastructure fault.
    async fn restore(&self, refresh_token: &str, entry: RefreshTokenEntry) {
        let fingerprint = token_fingerprint(refresh_token);
        match self.store.put(refresh_token, entry).await {
            Ok(()) => debug!("Refresh token {} restored after failed rotation", fingerprint),
            Err(e) => error!("Could not restore refresh token {}: {}", fingerprint, e),
        }
    }

    /// Forget `refresh_token`. Access tokens already issued stay valid until they expire.
    pub async fn revoke(&self, refresh_token: &str) -> Result<bool, DomainError> {
        let removed = self.store.remove(refresh_token).await?;
        if removed {
            info!("Refresh token {} revoked", token_fingerprint(refresh_token));
        } else {
            debug!("Revoke ignored: unknown token {}", token_fingerprint(refresh_token));
        }
        Ok(removed)
    }
}
