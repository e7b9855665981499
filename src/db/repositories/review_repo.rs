//! Review repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Review};

/// Received-review statistics for one user
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct RatingSummary {
    pub review_count: i64,
    pub average_rating: Option<f64>,
}

/// Repository for review database operations
pub struct ReviewRepository;

impl ReviewRepository {
    /// Create a new review
    pub async fn create(
        pool: &PgPool,
        session_id: &Uuid,
        reviewer_id: &Uuid,
        reviewee_id: &Uuid,
        rating: i32,
        comment: Option<&str>,
    ) -> AppResult<Review> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (session_id, reviewer_id, reviewee_id, rating, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(session_id)
        .bind(reviewer_id)
        .bind(reviewee_id)
        .bind(rating)
        .bind(comment)
        .fetch_one(pool)
        .await?;

        Ok(review)
    }

    /// Rating statistics for reviews a user has received
    pub async fn rating_summary(pool: &PgPool, reviewee_id: &Uuid) -> AppResult<RatingSummary> {
        let summary = sqlx::query_as::<_, RatingSummary>(
            r#"
            SELECT
                COUNT(*) AS review_count,
                AVG(rating)::float8 AS average_rating
            FROM reviews
            WHERE reviewee_id = $1
            "#,
        )
        .bind(reviewee_id)
        .fetch_one(pool)
        .await?;

        Ok(summary)
    }
}
