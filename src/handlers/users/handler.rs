//! User handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::auth::response::UserResponse,
    handlers::reviews::response::ReceivedReviewResponse,
    handlers::skills::response::SkillResponse,
    middleware::auth::AuthenticatedUser,
    services::{ReviewService, UserService},
    state::AppState,
};

use super::{request::UpdateUserRequest, response::UserProfileResponse};

/// Get a user's public profile with skills and derived badges
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserProfileResponse>> {
    let (user, skills, badges) = UserService::get_profile(state.db(), &id).await?;

    Ok(Json(UserProfileResponse {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
        bio: user.bio,
        avatar_url: user.avatar_url,
        created_at: user.created_at,
        skills: skills.into_iter().map(SkillResponse::from).collect(),
        badges: badges.iter().map(|b| b.as_str().to_string()).collect(),
    }))
}

/// Update user profile (self or admin)
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    // Validate request
    payload.validate()?;

    let user = UserService::update_user(
        state.db(),
        &auth_user.id,
        &id,
        auth_user.is_admin,
        payload.email.as_deref(),
        payload.display_name.as_deref(),
        payload.bio.as_deref(),
        payload.avatar_url.as_deref(),
        payload.current_password.as_deref(),
        payload.new_password.as_deref(),
    )
    .await?;

    Ok(Json(UserResponse::from(user)))
}

/// Reviews a user has received
pub async fn get_user_reviews(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<ReceivedReviewResponse>>> {
    // 404 for unknown users rather than an empty list
    UserService::get_user_by_id(state.db(), &id).await?;

    let reviews = ReviewService::list_received(state.db(), &id).await?;

    Ok(Json(reviews))
}
