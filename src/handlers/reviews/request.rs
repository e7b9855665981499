//! Review request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create review request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    pub session_id: Uuid,

    pub reviewee_id: Uuid,

    /// 1-5; range-checked by the review gate itself
    pub rating: i32,

    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}
