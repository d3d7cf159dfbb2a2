//! Request payloads

pub mod auth;
pub mod chat;
pub mod comment;
pub mod page;
pub mod profile;

pub use auth::{LoginRequest, RefreshRequest, RegisterRequest, ValidateRequest};
pub use chat::SendMessageRequest;
pub use comment::{CreateCommentRequest, UpdateCommentRequest};
pub use page::PageQuery;
pub use profile::{ChangePasswordRequest, UpdateProfileRequest};

use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

/// Run the derived rules and report the first violated one.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), ApiError> {
    payload
        .validate()
        .map_err(|errors| ApiError::BadRequest(first_message(&errors)))
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field))
            })
        })
        .next()
        .unwrap_or_else(|| "Invalid request".to_string())
}
