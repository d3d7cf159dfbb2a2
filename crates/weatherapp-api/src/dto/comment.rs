use serde::Deserialize;
use validator::Validate;

use weatherapp_core::services::CreateCommentCommand;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 100, message = "Location name must be between 1 and 100 characters"))]
    pub location_name: String,

    #[validate(length(min = 1, max = 1000, message = "Comment must be between 1 and 1000 characters"))]
    pub content: String,
}

impl From<CreateCommentRequest> for CreateCommentCommand {
    fn from(req: CreateCommentRequest) -> Self {
        CreateCommentCommand {
            location_name: req.location_name,
            content: req.content,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be between 1 and 1000 characters"))]
    pub content: String,
}
