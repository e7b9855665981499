//! Session service
//!
//! Owns the learning-session lifecycle: creation of requests and the
//! guarded status transitions. Authorization is per-edge: the provider
//! accepts and completes, either participant cancels, and nothing leaves
//! a terminal state.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{SessionRepository, SkillRepository},
    error::{AppError, AppResult},
    handlers::sessions::response::{ParticipantSummary, SessionDetailResponse, SkillSummary},
    models::{Session, SessionStatus},
};

/// Flat join row backing the enriched session listing
#[derive(Debug, sqlx::FromRow)]
struct SessionDetailRow {
    id: Uuid,
    status: String,
    scheduled_at: Option<chrono::DateTime<chrono::Utc>>,
    message: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    requester_id: Uuid,
    requester_username: String,
    requester_display_name: Option<String>,
    requester_avatar_url: Option<String>,
    provider_id: Uuid,
    provider_username: String,
    provider_display_name: Option<String>,
    provider_avatar_url: Option<String>,
    skill_id: Uuid,
    skill_name: String,
    skill_category: String,
    skill_type: String,
    skill_experience_level: Option<String>,
}

/// Session service for business logic
pub struct SessionService;

impl SessionService {
    /// Create a session request against a provider's skill.
    ///
    /// The skill must belong to the declared provider, and users cannot
    /// request sessions with themselves. New sessions start `pending`.
    pub async fn request_session(
        pool: &PgPool,
        requester_id: &Uuid,
        provider_id: &Uuid,
        skill_id: &Uuid,
        message: Option<&str>,
        scheduled_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> AppResult<Session> {
        let skill = SkillRepository::find_by_id(pool, skill_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Skill not found".to_string()))?;

        if skill.user_id != *provider_id {
            return Err(AppError::Validation(
                "Skill does not belong to the specified provider".to_string(),
            ));
        }

        if requester_id == provider_id {
            return Err(AppError::Validation(
                "Cannot request a session with yourself".to_string(),
            ));
        }

        SessionRepository::create(pool, requester_id, provider_id, skill_id, message, scheduled_at)
            .await
    }

    /// Apply a status transition on behalf of a user.
    ///
    /// Fails with `NotFound` for unknown sessions, `InvalidTransition` for
    /// unrecognized target statuses, `Forbidden` when the actor is not
    /// authorized for the specific edge, and `Conflict` when a concurrent
    /// transition wins the conditional update.
    pub async fn transition_status(
        pool: &PgPool,
        session_id: &Uuid,
        target: &str,
        acting_user: &Uuid,
    ) -> AppResult<Session> {
        let session = SessionRepository::find_by_id(pool, session_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;

        let target_status = SessionStatus::from_str(target).ok_or_else(|| {
            AppError::InvalidTransition(format!("Unrecognized session status: {}", target))
        })?;

        if target_status == SessionStatus::Pending {
            return Err(AppError::InvalidTransition(
                "Sessions cannot return to pending".to_string(),
            ));
        }

        let current = SessionStatus::from_str(&session.status).ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "Session {} carries invalid status {}",
                session.id,
                session.status
            ))
        })?;

        let role = session.role_of(acting_user).ok_or_else(|| {
            AppError::Forbidden("Only session participants may update a session".to_string())
        })?;

        if !current.may_transition_to(target_status, role) {
            return Err(AppError::Forbidden(format!(
                "The {} may not move this session from {} to {}",
                role, current, target_status
            )));
        }

        // Conditional update: a concurrent transition on the same session
        // leaves the status filter unmatched instead of clobbering it.
        SessionRepository::update_status(
            pool,
            session_id,
            current.as_str(),
            target_status.as_str(),
        )
        .await?
        .ok_or_else(|| AppError::Conflict("Session status changed concurrently".to_string()))
    }

    /// Every session a user participates in, enriched with both
    /// participants and the skill, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &Uuid,
    ) -> AppResult<Vec<SessionDetailResponse>> {
        let rows = sqlx::query_as::<_, SessionDetailRow>(
            r#"
            SELECT
                s.id,
                s.status,
                s.scheduled_at,
                s.message,
                s.created_at,
                r.id AS requester_id,
                r.username AS requester_username,
                r.display_name AS requester_display_name,
                r.avatar_url AS requester_avatar_url,
                p.id AS provider_id,
                p.username AS provider_username,
                p.display_name AS provider_display_name,
                p.avatar_url AS provider_avatar_url,
                k.id AS skill_id,
                k.name AS skill_name,
                k.category AS skill_category,
                k.skill_type,
                k.experience_level AS skill_experience_level
            FROM sessions s
            JOIN users r ON s.requester_id = r.id
            JOIN users p ON s.provider_id = p.id
            JOIN skills k ON s.skill_id = k.id
            WHERE s.requester_id = $1 OR s.provider_id = $1
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| SessionDetailResponse {
                id: row.id,
                status: row.status,
                scheduled_at: row.scheduled_at,
                message: row.message,
                created_at: row.created_at,
                requester: ParticipantSummary {
                    id: row.requester_id,
                    username: row.requester_username,
                    display_name: row.requester_display_name,
                    avatar_url: row.requester_avatar_url,
                },
                provider: ParticipantSummary {
                    id: row.provider_id,
                    username: row.provider_username,
                    display_name: row.provider_display_name,
                    avatar_url: row.provider_avatar_url,
                },
                skill: SkillSummary {
                    id: row.skill_id,
                    name: row.skill_name,
                    category: row.skill_category,
                    skill_type: row.skill_type,
                    experience_level: row.skill_experience_level,
                },
            })
            .collect())
    }
}
