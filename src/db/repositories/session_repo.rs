//! Session repository
//!
//! Handles learning-session requests. The status write is a conditional
//! update so two concurrent transitions on the same session cannot both
//! succeed.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Session};

/// Repository for session database operations
pub struct SessionRepository;

impl SessionRepository {
    /// Create a new session request in the `pending` state
    pub async fn create(
        pool: &PgPool,
        requester_id: &Uuid,
        provider_id: &Uuid,
        skill_id: &Uuid,
        message: Option<&str>,
        scheduled_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> AppResult<Session> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (requester_id, provider_id, skill_id, message, scheduled_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(requester_id)
        .bind(provider_id)
        .bind(skill_id)
        .bind(message)
        .bind(scheduled_at)
        .fetch_one(pool)
        .await?;

        Ok(session)
    }

    /// Find session by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Session>> {
        let session = sqlx::query_as::<_, Session>(r#"SELECT * FROM sessions WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(session)
    }

    /// Conditionally move a session from one status to another.
    ///
    /// Returns `None` when the row no longer carries `from` (a concurrent
    /// transition won the race); no other column is touched.
    pub async fn update_status(
        pool: &PgPool,
        id: &Uuid,
        from: &str,
        to: &str,
    ) -> AppResult<Option<Session>> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            UPDATE sessions
            SET status = $3
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(from)
        .bind(to)
        .fetch_optional(pool)
        .await?;

        Ok(session)
    }

    /// Count sessions completed with the user as provider
    pub async fn count_completed_for_provider(pool: &PgPool, user_id: &Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM sessions WHERE provider_id = $1 AND status = 'completed'"#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// Count total sessions
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM sessions"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
