//! Skill repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{constants::skill_types, error::AppResult, models::Skill};

/// Repository for skill database operations
pub struct SkillRepository;

impl SkillRepository {
    /// Create a new skill
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        name: &str,
        description: Option<&str>,
        category: &str,
        skill_type: &str,
        experience_level: Option<&str>,
    ) -> AppResult<Skill> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (user_id, name, description, category, skill_type, experience_level)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(description)
        .bind(category)
        .bind(skill_type)
        .bind(experience_level)
        .fetch_one(pool)
        .await?;

        Ok(skill)
    }

    /// Find skill by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Skill>> {
        let skill = sqlx::query_as::<_, Skill>(r#"SELECT * FROM skills WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(skill)
    }

    /// Delete a skill
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM skills WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List all skills owned by a user, newest first
    pub async fn list_by_user(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<Skill>> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"SELECT * FROM skills WHERE user_id = $1 ORDER BY created_at DESC"#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(skills)
    }

    /// Count skills owned by a user
    pub async fn count_for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM skills WHERE user_id = $1"#)
            .bind(user_id)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Count offered skills owned by a user
    pub async fn count_offerings_for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM skills WHERE user_id = $1 AND skill_type = $2"#,
        )
        .bind(user_id)
        .bind(skill_types::OFFERING)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// Count total skills
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM skills"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
