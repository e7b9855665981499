//! Skill request DTOs

use serde::Deserialize;
use validator::Validate;

/// Create skill request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSkillRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub category: String,

    /// "offering" or "seeking"
    pub skill_type: String,

    /// "beginner", "intermediate", or "advanced"
    pub experience_level: Option<String>,
}

/// Skill search query parameters
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}
