use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use weatherapp_core::DomainError;

pub const INVALID_REFRESH_TOKEN: &str = "Invalid refresh token";
const INTERNAL_MESSAGE: &str = "An unexpected error occurred";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BadRequest", msg)
            }
            ApiError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized: {}", msg);
                (StatusCode::UNAUTHORIZED, "Unauthorized", msg)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NotFound", msg)
            }
            ApiError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (StatusCode::CONFLICT, "Conflict", msg)
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            error: error_type,
            message,
        });

        (status, body).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UserNotFound
            | DomainError::CommentNotFound
            | DomainError::ChatMessageNotFound => ApiError::NotFound(err.to_string()),
            DomainError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            DomainError::UsernameAlreadyExists(_) | DomainError::EmailAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            DomainError::RefreshTokenNotFound | DomainError::RefreshTokenExpired => {
                ApiError::Unauthorized(INVALID_REFRESH_TOKEN.to_string())
            }
            DomainError::PasswordTooShort(_)
            | DomainError::PasswordTooLong(_)
            | DomainError::ValidationError(_) => ApiError::BadRequest(err.to_string()),
            DomainError::PasswordHashError(_)
            | DomainError::TokenGenerationError(_)
            | DomainError::DatabaseError(_)
            | DomainError::CacheError(_)
            | DomainError::InternalError(_) => ApiError::InternalError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: DomainError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn test_domain_error_status_codes() {
        assert_eq!(status_of(DomainError::InvalidCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(DomainError::RefreshTokenExpired), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(DomainError::UserNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(DomainError::CommentNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(DomainError::ChatMessageNotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(DomainError::UsernameAlreadyExists("alice".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(status_of(DomainError::PasswordTooShort(6)), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(DomainError::DatabaseError("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_refresh_failures_share_one_message() {
        for err in [DomainError::RefreshTokenNotFound, DomainError::RefreshTokenExpired] {
            match ApiError::from(err) {
                ApiError::Unauthorized(msg) => assert_eq!(msg, INVALID_REFRESH_TOKEN),
                other => panic!("unexpected mapping: {:?}", other),
            }
        }
    }
}
