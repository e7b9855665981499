//! Skill response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::Skill;

/// Skill representation
#[derive(Debug, Serialize)]
pub struct SkillResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub skill_type: String,
    pub experience_level: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Skill> for SkillResponse {
    fn from(skill: Skill) -> Self {
        Self {
            id: skill.id,
            user_id: skill.user_id,
            name: skill.name,
            description: skill.description,
            category: skill.category,
            skill_type: skill.skill_type,
            experience_level: skill.experience_level,
            created_at: skill.created_at,
        }
    }
}

/// Search result row: a skill joined with its owner
#[derive(Debug, Serialize, FromRow)]
pub struct SkillWithOwnerResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub skill_type: String,
    pub experience_level: Option<String>,
    pub created_at: DateTime<Utc>,
    pub owner_id: Uuid,
    pub owner_username: String,
    pub owner_display_name: Option<String>,
    pub owner_avatar_url: Option<String>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SkillWithOwnerResponse>,
    pub total: usize,
}
