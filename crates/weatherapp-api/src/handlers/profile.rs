//! Profile endpoints for the signed-in user

use axum::{extract::State, Json};

use weatherapp_core::UserProfile;

use crate::dto::{ChangePasswordRequest, UpdateProfileRequest};
use crate::error::ApiError;
use crate::extract::{AuthUser, ValidatedJson};
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<ApiResponse<UserProfile>>, ApiError> {
    let profile = state.profiles.get_profile(user.user_id).await?;
    Ok(Json(ApiResponse::success(profile)))
}

/// PUT /api/profile
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserProfile>>, ApiError> {
    let profile = state
        .profiles
        .update_profile(user.user_id, payload.into())
        .await?;
    Ok(Json(ApiResponse::success(profile)))
}

/// POST /api/profile/change-password
pub async fn change_password(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .profiles
        .change_password(user.user_id, &payload.current_password, &payload.new_password)
        .await?;
    Ok(Json(ApiResponse::message("Password changed successfully")))
}

/// DELETE /api/profile
pub async fn delete_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.profiles.delete_profile(user.user_id).await?;
    Ok(Json(ApiResponse::message("Profile deleted successfully")))
}
