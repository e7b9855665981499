//! Review handler implementations

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::ReviewService,
    state::AppState,
};

use super::{request::CreateReviewRequest, response::ReviewResponse};

/// Leave a review on a completed session
pub async fn create_review(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<ReviewResponse>)> {
    // Validate request
    payload.validate()?;

    let review = ReviewService::create_review(
        state.db(),
        &auth_user.id,
        &payload.session_id,
        &payload.reviewee_id,
        payload.rating,
        payload.comment.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(ReviewResponse::from(review))))
}
