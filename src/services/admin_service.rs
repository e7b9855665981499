//! Admin service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{SessionRepository, SkillRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::admin::response::{CategoryCount, PlatformStatsResponse, StatusCount},
    models::User,
};

/// Admin service for platform management
pub struct AdminService;

impl AdminService {
    /// List all users with pagination and optional search
    pub async fn list_users(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        search: Option<&str>,
    ) -> AppResult<(Vec<User>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        UserRepository::list(pool, offset, limit, search).await
    }

    /// Set a user's admin flag
    pub async fn set_user_role(pool: &PgPool, user_id: &Uuid, is_admin: bool) -> AppResult<User> {
        if UserRepository::find_by_id(pool, user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        UserRepository::set_admin(pool, user_id, is_admin).await
    }

    /// Delete a user; owned skills, sessions, and reviews cascade
    pub async fn delete_user(pool: &PgPool, user_id: &Uuid) -> AppResult<()> {
        if !UserRepository::delete(pool, user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }

    /// Aggregate platform statistics
    pub async fn get_platform_stats(pool: &PgPool) -> AppResult<PlatformStatsResponse> {
        let total_users = UserRepository::count(pool).await?;
        let total_skills = SkillRepository::count(pool).await?;
        let total_sessions = SessionRepository::count(pool).await?;

        let skills_by_category = sqlx::query_as::<_, CategoryCount>(
            r#"
            SELECT category, COUNT(*) AS count
            FROM skills
            GROUP BY category
            ORDER BY count DESC, category
            "#,
        )
        .fetch_all(pool)
        .await?;

        let sessions_by_status = sqlx::query_as::<_, StatusCount>(
            r#"
            SELECT status, COUNT(*) AS count
            FROM sessions
            GROUP BY status
            ORDER BY count DESC, status
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(PlatformStatsResponse {
            total_users,
            total_skills,
            total_sessions,
            skills_by_category,
            sessions_by_status,
        })
    }
}
