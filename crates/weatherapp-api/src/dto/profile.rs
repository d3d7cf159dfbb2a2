use serde::Deserialize;
use validator::Validate;

use weatherapp_core::services::UpdateProfileCommand;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100, message = "First name too long"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "Last name too long"))]
    pub last_name: Option<String>,

    #[validate(length(max = 2048, message = "Avatar URL too long"))]
    pub avatar: Option<String>,
}

impl From<UpdateProfileRequest> for UpdateProfileCommand {
    fn from(req: UpdateProfileRequest) -> Self {
        UpdateProfileCommand {
            first_name: req.first_name,
            last_name: req.last_name,
            avatar: req.avatar,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,

    #[validate(length(min = 6, max = 128, message = "Password must be between 6 and 128 characters"))]
    pub new_password: String,
}
