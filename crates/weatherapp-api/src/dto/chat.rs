use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, max = 500, message = "Message must be between 1 and 500 characters"))]
    pub message: String,
}
