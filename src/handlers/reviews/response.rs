//! Review response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::Review;

/// Review representation
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub session_id: Uuid,
    pub reviewer_id: Uuid,
    pub reviewee_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            session_id: review.session_id,
            reviewer_id: review.reviewer_id,
            reviewee_id: review.reviewee_id,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}

/// A received review with the reviewer's identity
#[derive(Debug, Serialize, FromRow)]
pub struct ReceivedReviewResponse {
    pub id: Uuid,
    pub session_id: Uuid,
    pub reviewer_id: Uuid,
    pub reviewer_username: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}
