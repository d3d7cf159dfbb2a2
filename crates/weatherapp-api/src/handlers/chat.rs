//! Global chat room, signed-in users only

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use weatherapp_core::ChatMessage;

use crate::dto::{PageQuery, SendMessageRequest};
use crate::error::ApiError;
use crate::extract::{AuthUser, ValidatedJson};
use crate::response::{ApiResponse, CountResponse};
use crate::state::AppState;

/// GET /api/chat/messages
pub async fn recent(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Query(page): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<ChatMessage>>>, ApiError> {
    let messages = state.chat.recent(page.into()).await?;
    Ok(Json(ApiResponse::success(messages)))
}

/// GET /api/chat/messages/count
pub async fn count(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state.chat.count().await?;
    Ok(Json(ApiResponse::success(CountResponse { count })))
}

/// GET /api/chat/messages/user
pub async fn list_mine(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(page): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<ChatMessage>>>, ApiError> {
    let messages = state.chat.list_by_user(user.user_id, page.into()).await?;
    Ok(Json(ApiResponse::success(messages)))
}

/// POST /api/chat/messages
pub async fn send(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(payload): ValidatedJson<SendMessageRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ChatMessage>>), ApiError> {
    let message = state
        .chat
        .send(user.user_id, &user.username, &payload.message)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(message))))
}

/// DELETE /api/chat/messages/{id}
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.chat.delete(id, user.user_id).await?;
    Ok(Json(ApiResponse::message("Message deleted successfully")))
}
