//! User response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::handlers::skills::response::SkillResponse;

/// Public profile with skills and derived badges
#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub skills: Vec<SkillResponse>,
    /// Recomputed from current counts on every read, never persisted
    pub badges: Vec<String>,
}
