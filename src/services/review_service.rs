//! Review service
//!
//! The review gate: reviews are appended against completed sessions only,
//! by a participant, about the other participant. Nothing stops a
//! participant from reviewing the same session twice.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{MAX_RATING, MIN_RATING},
    db::repositories::{ReviewRepository, SessionRepository},
    error::{AppError, AppResult},
    handlers::reviews::response::ReceivedReviewResponse,
    models::{Review, Session, SessionStatus},
};

/// Review service for business logic
pub struct ReviewService;

impl ReviewService {
    /// Create a review for a completed session
    pub async fn create_review(
        pool: &PgPool,
        reviewer_id: &Uuid,
        session_id: &Uuid,
        reviewee_id: &Uuid,
        rating: i32,
        comment: Option<&str>,
    ) -> AppResult<Review> {
        let session = SessionRepository::find_by_id(pool, session_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;

        if session.role_of(reviewer_id).is_none() {
            return Err(AppError::Forbidden(
                "Only session participants may leave a review".to_string(),
            ));
        }

        Self::validate_review(&session, reviewer_id, reviewee_id, rating)?;

        ReviewRepository::create(pool, session_id, reviewer_id, reviewee_id, rating, comment).await
    }

    /// The review gate proper: session completed, reviewee is the other
    /// participant, rating in range.
    fn validate_review(
        session: &Session,
        reviewer_id: &Uuid,
        reviewee_id: &Uuid,
        rating: i32,
    ) -> AppResult<()> {
        if session.status != SessionStatus::Completed.as_str() {
            return Err(AppError::InvalidReview(
                "Reviews can only be left on completed sessions".to_string(),
            ));
        }

        let other = session.other_participant(reviewer_id).ok_or_else(|| {
            AppError::InvalidReview("Reviewer is not a session participant".to_string())
        })?;

        if *reviewee_id != other {
            return Err(AppError::InvalidReview(
                "Reviewee must be the other session participant".to_string(),
            ));
        }

        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(AppError::InvalidReview(format!(
                "Rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }

        Ok(())
    }

    /// Reviews a user has received, with reviewer identity, newest first
    pub async fn list_received(
        pool: &PgPool,
        reviewee_id: &Uuid,
    ) -> AppResult<Vec<ReceivedReviewResponse>> {
        let reviews = sqlx::query_as::<_, ReceivedReviewResponse>(
            r#"
            SELECT
                rv.id,
                rv.session_id,
                rv.reviewer_id,
                u.username AS reviewer_username,
                rv.rating,
                rv.comment,
                rv.created_at
            FROM reviews rv
            JOIN users u ON rv.reviewer_id = u.id
            WHERE rv.reviewee_id = $1
            ORDER BY rv.created_at DESC
            "#,
        )
        .bind(reviewee_id)
        .fetch_all(pool)
        .await?;

        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn completed_session(requester: Uuid, provider: Uuid) -> Session {
        Session {
            id: Uuid::new_v4(),
            requester_id: requester,
            provider_id: provider,
            skill_id: Uuid::new_v4(),
            status: SessionStatus::Completed.as_str().to_string(),
            scheduled_at: None,
            message: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_review_accepted_on_completed_session() {
        let requester = Uuid::new_v4();
        let provider = Uuid::new_v4();
        let session = completed_session(requester, provider);

        assert!(ReviewService::validate_review(&session, &requester, &provider, 5).is_ok());
        assert!(ReviewService::validate_review(&session, &provider, &requester, 1).is_ok());
    }

    #[test]
    fn test_review_rejected_unless_completed() {
        let requester = Uuid::new_v4();
        let provider = Uuid::new_v4();

        for status in [
            SessionStatus::Pending,
            SessionStatus::Accepted,
            SessionStatus::Cancelled,
        ] {
            let mut session = completed_session(requester, provider);
            session.status = status.as_str().to_string();

            let err = ReviewService::validate_review(&session, &requester, &provider, 5)
                .expect_err("review must be rejected");
            assert!(matches!(err, AppError::InvalidReview(_)));
        }
    }

    #[test]
    fn test_reviewee_must_be_other_participant() {
        let requester = Uuid::new_v4();
        let provider = Uuid::new_v4();
        let session = completed_session(requester, provider);

        // Self-review
        let err = ReviewService::validate_review(&session, &requester, &requester, 4)
            .expect_err("self-review must be rejected");
        assert!(matches!(err, AppError::InvalidReview(_)));

        // Reviewee outside the session
        let err = ReviewService::validate_review(&session, &requester, &Uuid::new_v4(), 4)
            .expect_err("outside reviewee must be rejected");
        assert!(matches!(err, AppError::InvalidReview(_)));
    }

    #[test]
    fn test_rating_must_be_in_range() {
        let requester = Uuid::new_v4();
        let provider = Uuid::new_v4();
        let session = completed_session(requester, provider);

        for rating in [0, 6, -1] {
            let err = ReviewService::validate_review(&session, &requester, &provider, rating)
                .expect_err("out-of-range rating must be rejected");
            assert!(matches!(err, AppError::InvalidReview(_)));
        }

        for rating in 1..=5 {
            assert!(ReviewService::validate_review(&session, &requester, &provider, rating).is_ok());
        }
    }
}
