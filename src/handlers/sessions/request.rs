//! Session request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Session request creation
#[derive(Debug, Deserialize, Validate)]
pub struct RequestSessionRequest {
    pub skill_id: Uuid,

    pub provider_id: Uuid,

    #[validate(length(max = 2000))]
    pub message: Option<String>,

    pub scheduled_at: Option<DateTime<Utc>>,
}

/// Session status transition
#[derive(Debug, Deserialize)]
pub struct UpdateSessionStatusRequest {
    /// Target status: "accepted", "completed", or "cancelled"
    pub status: String,
}
