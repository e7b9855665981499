//! Skill service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::SkillRepository,
    error::{AppError, AppResult},
    handlers::skills::response::SkillWithOwnerResponse,
    models::Skill,
    utils::validation,
};

/// Skill service for business logic
pub struct SkillService;

impl SkillService {
    /// Create a new skill for its owner
    pub async fn create_skill(
        pool: &PgPool,
        owner_id: &Uuid,
        name: &str,
        description: Option<&str>,
        category: &str,
        skill_type: &str,
        experience_level: Option<&str>,
    ) -> AppResult<Skill> {
        validation::validate_skill_type(skill_type)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(level) = experience_level {
            validation::validate_experience_level(level)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }

        SkillRepository::create(
            pool,
            owner_id,
            name,
            description,
            category,
            skill_type,
            experience_level,
        )
        .await
    }

    /// Delete a skill; only its owner may do so
    pub async fn delete_skill(pool: &PgPool, skill_id: &Uuid, acting_user: &Uuid) -> AppResult<()> {
        let skill = SkillRepository::find_by_id(pool, skill_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Skill not found".to_string()))?;

        if skill.user_id != *acting_user {
            return Err(AppError::Forbidden(
                "Only the owner may delete a skill".to_string(),
            ));
        }

        SkillRepository::delete(pool, skill_id).await?;

        Ok(())
    }

    /// List all skills owned by a user
    pub async fn list_user_skills(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<Skill>> {
        SkillRepository::list_by_user(pool, user_id).await
    }

    /// Search skills joined with their owners.
    ///
    /// Case-insensitive substring match against name or description when a
    /// query is given, exact match on category when given; absent filters
    /// pass everything through. Newest first, no pagination.
    pub async fn search(
        pool: &PgPool,
        query: Option<&str>,
        category: Option<&str>,
    ) -> AppResult<Vec<SkillWithOwnerResponse>> {
        let query_pattern = query.map(|q| format!("%{}%", q));

        let results = sqlx::query_as::<_, SkillWithOwnerResponse>(
            r#"
            SELECT
                s.id,
                s.name,
                s.description,
                s.category,
                s.skill_type,
                s.experience_level,
                s.created_at,
                u.id AS owner_id,
                u.username AS owner_username,
                u.display_name AS owner_display_name,
                u.avatar_url AS owner_avatar_url
            FROM skills s
            JOIN users u ON s.user_id = u.id
            WHERE
                ($1::text IS NULL OR s.name ILIKE $1 OR s.description ILIKE $1)
                AND ($2::text IS NULL OR s.category = $2)
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(&query_pattern)
        .bind(category)
        .fetch_all(pool)
        .await?;

        Ok(results)
    }
}
