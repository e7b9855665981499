//! Session response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Session;

/// Bare session representation
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub provider_id: Uuid,
    pub skill_id: Uuid,
    pub status: String,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.id,
            requester_id: session.requester_id,
            provider_id: session.provider_id,
            skill_id: session.skill_id,
            status: session.status,
            scheduled_at: session.scheduled_at,
            message: session.message,
            created_at: session.created_at,
        }
    }
}

/// One side of a session in the enriched listing
#[derive(Debug, Serialize)]
pub struct ParticipantSummary {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// The skill a session was requested against
#[derive(Debug, Serialize)]
pub struct SkillSummary {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub skill_type: String,
    pub experience_level: Option<String>,
}

/// Session enriched with both participants and the skill
#[derive(Debug, Serialize)]
pub struct SessionDetailResponse {
    pub id: Uuid,
    pub status: String,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub requester: ParticipantSummary,
    pub provider: ParticipantSummary,
    pub skill: SkillSummary,
}

/// Session listing response
#[derive(Debug, Serialize)]
pub struct MySessionsResponse {
    pub sessions: Vec<SessionDetailResponse>,
    pub total: usize,
}
