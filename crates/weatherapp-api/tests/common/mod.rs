//! Router over the in-memory adapters plus a tiny request helper.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use weatherapp_api::{build_router, AppState};
use weatherapp_core::services::{
    AuthService, ChatService, CommentService, ProfileService, TokenService,
};
use weatherapp_infrastructure::{
    MemoryChatRepository, MemoryCommentRepository, MemoryRefreshTokenStore, MemoryUserRepository,
};
use weatherapp_security::JwtService;

const SECRET: &str = "http-test-secret-0123456789abcdef";

pub fn app() -> Router {
    let users = Arc::new(MemoryUserRepository::new());
    let tokens = Arc::new(TokenService::new(
        JwtService::new(SECRET, 3600),
        Arc::new(MemoryRefreshTokenStore::new()),
        users.clone(),
        604800,
    ));
    let state = AppState::new(
        Arc::new(AuthService::new(users.clone(), tokens.clone())),
        Arc::new(ProfileService::new(users)),
        Arc::new(CommentService::new(Arc::new(MemoryCommentRepository::new()))),
        Arc::new(ChatService::new(Arc::new(MemoryChatRepository::new()))),
        tokens,
    );
    build_router(state, &[])
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    bearer: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub fn token(body: &Value, field: &str) -> String {
    body[field].as_str().unwrap().to_string()
}

/// Registers `username` and returns its access token.
pub async fn sign_up(app: &Router, username: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "Secr3t!"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    token(&body, "token")
}
