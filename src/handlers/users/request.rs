//! User request DTOs

use serde::Deserialize;
use validator::Validate;

/// Update user request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 100))]
    pub display_name: Option<String>,

    #[validate(length(max = 1000))]
    pub bio: Option<String>,

    #[validate(length(max = 512))]
    pub avatar_url: Option<String>,

    /// Current password (required when changing the password)
    pub current_password: Option<String>,

    /// New password
    #[validate(length(min = 8, max = 128))]
    pub new_password: Option<String>,
}
