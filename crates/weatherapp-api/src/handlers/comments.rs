//! Location comments. Reading is public; writing needs a signed-in user.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use weatherapp_core::Comment;

use crate::dto::{CreateCommentRequest, PageQuery, UpdateCommentRequest};
use crate::error::ApiError;
use crate::extract::{AuthUser, ValidatedJson};
use crate::response::{ApiResponse, CountResponse};
use crate::state::AppState;

/// GET /api/comments/location/{location}
pub async fn list_for_location(
    State(state): State<AppState>,
    Path(location): Path<String>,
    Query(page): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<Comment>>>, ApiError> {
    let comments = state.comments.list_by_location(&location, page.into()).await?;
    Ok(Json(ApiResponse::success(comments)))
}

/// GET /api/comments/location/{location}/count
pub async fn count_for_location(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state.comments.count_by_location(&location).await?;
    Ok(Json(ApiResponse::success(CountResponse { count })))
}

/// GET /api/comments/user
pub async fn list_mine(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(page): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<Comment>>>, ApiError> {
    let comments = state.comments.list_by_user(user.user_id, page.into()).await?;
    Ok(Json(ApiResponse::success(comments)))
}

/// POST /api/comments
pub async fn create(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(payload): ValidatedJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Comment>>), ApiError> {
    let comment = state
        .comments
        .create(user.user_id, &user.username, payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(comment))))
}

/// PUT /api/comments/{id}
pub async fn update(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateCommentRequest>,
) -> Result<Json<ApiResponse<Comment>>, ApiError> {
    let comment = state
        .comments
        .update(id, user.user_id, &payload.content)
        .await?;
    Ok(Json(ApiResponse::success(comment)))
}

/// DELETE /api/comments/{id}
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.comments.delete(id, user.user_id).await?;
    Ok(Json(ApiResponse::message("Comment deleted successfully")))
}
