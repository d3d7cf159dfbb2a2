// ============================================================================
// WeatherApp API - Auth Handlers
// File: crates/weatherapp-api/src/handlers/auth.rs
// ============================================================================
//! Authentication HTTP handlers (register, login, refresh, revoke, validate)

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::dto::{LoginRequest, RefreshRequest, RegisterRequest, ValidateRequest};
use crate::error::ApiError;
use crate::extract::{AuthUser, ValidatedJson};
use crate::response::{AuthResponse, ValidateResponse};
use crate::state::AppState;

/// Register handler - POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let result = state.auth.register(payload.into()).await?;
    Ok(Json(AuthResponse::signed_in(result, "Registration successful")))
}

/// Login handler - POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let result = state.auth.login(&payload.username, &payload.password).await?;
    Ok(Json(AuthResponse::signed_in(result, "Login successful")))
}

/// Refresh handler - POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RefreshRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let result = state.auth.refresh(&payload.refresh_token).await?;
    Ok(Json(AuthResponse::signed_in(result, "Token refreshed successfully")))
}

/// Revoke handler - POST /api/auth/revoke
///
/// Any signed-in user may revoke any refresh token they hold.
pub async fn revoke(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(payload): ValidatedJson<RefreshRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    if state.auth.revoke(&payload.refresh_token).await? {
        info!("Refresh token revoked by user {}", user.user_id);
        Ok((
            StatusCode::OK,
            Json(AuthResponse::outcome(true, "Token revoked successfully")),
        ))
    } else {
        Ok((
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::outcome(false, "Failed to revoke token")),
        ))
    }
}

/// Validate handler - POST /api/auth/validate
pub async fn validate(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ValidateRequest>,
) -> Json<ValidateResponse> {
    Json(ValidateResponse::new(state.auth.validate(&payload.token)))
}
