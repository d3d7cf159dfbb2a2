//! Refresh-token lifecycle against the in-memory adapters.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use futures::future::join_all;

use weatherapp_core::domain::{NewUser, User};
use weatherapp_core::error::DomainError;
use weatherapp_core::repositories::{RefreshTokenStore, UserRepository};
use weatherapp_core::services::{AuthService, RegisterCommand, TokenService};
use weatherapp_infrastructure::{MemoryRefreshTokenStore, MemoryUserRepository};
use weatherapp_security::JwtService;

const SECRET: &str = "integration-secret-0123456789abcdef";

struct Harness {
    users: Arc<MemoryUserRepository>,
    store: Arc<MemoryRefreshTokenStore>,
    tokens: Arc<TokenService>,
    auth: AuthService,
}

fn harness() -> Harness {
    let users = Arc::new(MemoryUserRepository::new());
    let store = Arc::new(MemoryRefreshTokenStore::new());
    let tokens = Arc::new(TokenService::new(
        JwtService::new(SECRET, 3600),
        store.clone(),
        users.clone(),
        604800,
    ));
    let auth = AuthService::new(users.clone(), tokens.clone());
    Harness {
        users,
        store,
        tokens,
        auth,
    }
}

fn alice() -> RegisterCommand {
    RegisterCommand {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "Secr3t!".to_string(),
        first_name: Some("Alice".to_string()),
        last_name: None,
    }
}

async fn stored_user(h: &Harness, id: i64) -> User {
    h.users.find_by_id(id).await.unwrap().unwrap()
}

#[tokio::test]
async fn register_then_refresh_round_trip() {
    let h = harness();
    let registered = h.auth.register(alice()).await.unwrap();

    let refreshed = h.auth.refresh(&registered.refresh_token).await.unwrap();
    assert_ne!(refreshed.refresh_token, registered.refresh_token);

    let claims = h
        .tokens
        .validate_access_token(&refreshed.access_token)
        .unwrap();
    assert_eq!(claims.user_id().unwrap(), registered.user.id);
    assert_eq!(claims.name, "alice");

    // only the rotated token is left
    assert_eq!(h.store.len(), 1);
    assert!(h.store.get(&refreshed.refresh_token).await.unwrap().is_some());
}

#[tokio::test]
async fn refresh_is_single_use() {
    let h = harness();
    let registered = h.auth.register(alice()).await.unwrap();

    h.auth.refresh(&registered.refresh_token).await.unwrap();
    let err = h.auth.refresh(&registered.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::RefreshTokenNotFound));
}

#[tokio::test]
async fn revoke_then_refresh_fails() {
    let h = harness();
    let registered = h.auth.register(alice()).await.unwrap();

    assert!(h.auth.revoke(&registered.refresh_token).await.unwrap());
    assert!(!h.auth.revoke(&registered.refresh_token).await.unwrap());

    let err = h.auth.refresh(&registered.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::RefreshTokenNotFound));

    // revocation does not touch access tokens
    assert!(h.auth.validate(&registered.access_token));
}

#[tokio::test]
async fn expired_refresh_token_is_removed_on_use() {
    let h = harness();
    let registered = h.auth.register(alice()).await.unwrap();
    let user = stored_user(&h, registered.user.id).await;

    let stale = h.tokens.issue_refresh_token();
    h.tokens
        .register_refresh_token(&stale, user.id, Duration::seconds(-1))
        .await
        .unwrap();
    assert!(h.store.get(&stale).await.unwrap().is_some());

    let err = h.auth.refresh(&stale).await.unwrap_err();
    assert!(matches!(err, DomainError::RefreshTokenExpired));
    assert!(h.store.get(&stale).await.unwrap().is_none());

    // second attempt no longer knows the token at all
    let err = h.auth.refresh(&stale).await.unwrap_err();
    assert!(matches!(err, DomainError::RefreshTokenNotFound));
}

#[tokio::test]
async fn register_overwrites_existing_mapping() {
    let h = harness();
    let a = h.auth.register(alice()).await.unwrap();
    let b = h
        .auth
        .register(RegisterCommand {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password: "hunter22".to_string(),
            first_name: None,
            last_name: None,
        })
        .await
        .unwrap();

    h.tokens
        .register_refresh_token("shared", a.user.id, Duration::days(1))
        .await
        .unwrap();
    h.tokens
        .register_refresh_token("shared", b.user.id, Duration::days(1))
        .await
        .unwrap();

    let refreshed = h.auth.refresh("shared").await.unwrap();
    assert_eq!(refreshed.user.username, "bob");
}

#[tokio::test]
async fn refresh_after_account_deletion_fails() {
    let h = harness();
    let registered = h.auth.register(alice()).await.unwrap();
    assert!(h.users.delete(registered.user.id).await.unwrap());

    let err = h.auth.refresh(&registered.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::UserNotFound));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_refresh_has_exactly_one_winner() {
    let h = harness();
    let registered = h.auth.register(alice()).await.unwrap();
    let token = registered.refresh_token.clone();

    let attempts = (0..32).map(|_| {
        let tokens = h.tokens.clone();
        let token = token.clone();
        tokio::spawn(async move { tokens.refresh(&token).await })
    });

    let results: Vec<_> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.expect("refresh task panicked"))
        .collect();

    let winners = results.iter().filter(|r| r.is_ok()).count();
    let not_found = results
        .iter()
        .filter(|r| matches!(r, Err(DomainError::RefreshTokenNotFound)))
        .count();

    assert_eq!(winners, 1);
    assert_eq!(not_found, results.len() - 1);
    assert_eq!(h.store.len(), 1);
}

#[tokio::test]
async fn duplicate_registration_issues_no_tokens() {
    let h = harness();
    h.auth.register(alice()).await.unwrap();
    assert_eq!(h.store.len(), 1);

    let err = h.auth.register(alice()).await.unwrap_err();
    assert!(matches!(err, DomainError::UsernameAlreadyExists(_)));
    assert_eq!(h.store.len(), 1);
}

#[tokio::test]
async fn wrong_password_issues_no_tokens() {
    let h = harness();
    h.auth.register(alice()).await.unwrap();

    let err = h.auth.login("alice", "not-it").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidCredentials));
    assert_eq!(h.store.len(), 1);

    let ok = h.auth.login("alice", "Secr3t!").await.unwrap();
    assert_eq!(ok.user.first_name.as_deref(), Some("Alice"));
    assert_eq!(h.store.len(), 2);
}

/// User store whose id lookups can be switched into a failing state.
struct FlakyUsers {
    inner: MemoryUserRepository,
    down: AtomicBool,
}

#[async_trait]
impl UserRepository for FlakyUsers {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        if self.down.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("down".to_string()));
        }
        self.inner.find_by_id(id).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.inner.find_by_username(username).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.inner.find_by_email(email).await
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        self.inner.create(user).await
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        self.inner.update(user).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        self.inner.delete(id).await
    }
}

#[tokio::test]
async fn refresh_token_survives_database_outage() {
    let users = Arc::new(FlakyUsers {
        inner: MemoryUserRepository::new(),
        down: AtomicBool::new(false),
    });
    let store = Arc::new(MemoryRefreshTokenStore::new());
    let tokens = Arc::new(TokenService::new(
        JwtService::new(SECRET, 3600),
        store.clone(),
        users.clone(),
        604800,
    ));
    let auth = AuthService::new(users.clone(), tokens);

    let registered = auth.register(alice()).await.unwrap();

    users.down.store(true, Ordering::SeqCst);
    let err = auth.refresh(&registered.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::DatabaseError(_)));
    assert_eq!(store.len(), 1);

    users.down.store(false, Ordering::SeqCst);
    let refreshed = auth.refresh(&registered.refresh_token).await.unwrap();
    assert_eq!(refreshed.user.id, registered.user.id);
    assert_eq!(store.len(), 1);
    assert!(store.get(&registered.refresh_token).await.unwrap().is_none());
}
