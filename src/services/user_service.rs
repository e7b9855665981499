//! User service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ReviewRepository, SessionRepository, SkillRepository, UserRepository},
    error::{AppError, AppResult},
    models::{Badge, BadgeCounts, Skill, User, derive_badges},
    services::AuthService,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Get a user's profile: the user, their skills, and derived badges
    pub async fn get_profile(pool: &PgPool, id: &Uuid) -> AppResult<(User, Vec<Skill>, Vec<Badge>)> {
        let user = Self::get_user_by_id(pool, id).await?;
        let skills = SkillRepository::list_by_user(pool, id).await?;
        let badges = Self::badges_for_user(pool, id).await?;

        Ok((user, skills, badges))
    }

    /// Recompute a user's badge set from current counts
    pub async fn badges_for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<Badge>> {
        let total_skills = SkillRepository::count_for_user(pool, user_id).await?;
        let offering_skills = SkillRepository::count_offerings_for_user(pool, user_id).await?;
        let completed_sessions =
            SessionRepository::count_completed_for_provider(pool, user_id).await?;
        let ratings = ReviewRepository::rating_summary(pool, user_id).await?;

        let counts = BadgeCounts {
            total_skills,
            offering_skills,
            completed_sessions,
            review_count: ratings.review_count,
            average_rating: ratings.average_rating,
        };

        Ok(derive_badges(&counts))
    }

    /// Update user profile
    #[allow(clippy::too_many_arguments)]
    pub async fn update_user(
        pool: &PgPool,
        requester_id: &Uuid,
        target_id: &Uuid,
        requester_is_admin: bool,
        email: Option<&str>,
        display_name: Option<&str>,
        bio: Option<&str>,
        avatar_url: Option<&str>,
        current_password: Option<&str>,
        new_password: Option<&str>,
    ) -> AppResult<User> {
        // Check permissions
        if requester_id != target_id && !requester_is_admin {
            return Err(AppError::Forbidden(
                "Cannot update other users' profiles".to_string(),
            ));
        }

        // If changing password, verify current password
        let password_hash = if let Some(new_pwd) = new_password {
            let current_pwd = current_password
                .ok_or_else(|| AppError::Validation("Current password required".to_string()))?;

            let user = Self::get_user_by_id(pool, target_id).await?;

            if !AuthService::verify_password(current_pwd, &user.password_hash)? {
                return Err(AppError::InvalidCredentials);
            }

            Some(AuthService::hash_password(new_pwd)?)
        } else {
            None
        };

        UserRepository::update(
            pool,
            target_id,
            email,
            display_name,
            bio,
            avatar_url,
            password_hash.as_deref(),
        )
        .await
    }
}
