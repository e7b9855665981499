//! Skill handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::SkillService,
    state::AppState,
};

use super::{
    request::{CreateSkillRequest, SearchQuery},
    response::{SearchResponse, SkillResponse},
};

/// Create a new skill owned by the caller
pub async fn create_skill(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateSkillRequest>,
) -> AppResult<(StatusCode, Json<SkillResponse>)> {
    // Validate request
    payload.validate()?;

    let skill = SkillService::create_skill(
        state.db(),
        &auth_user.id,
        &payload.name,
        payload.description.as_deref(),
        &payload.category,
        &payload.skill_type,
        payload.experience_level.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(SkillResponse::from(skill))))
}

/// Delete a skill (owner only)
pub async fn delete_skill(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    SkillService::delete_skill(state.db(), &id, &auth_user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the caller's own skills
pub async fn get_my_skills(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<SkillResponse>>> {
    let skills = SkillService::list_user_skills(state.db(), &auth_user.id).await?;

    Ok(Json(skills.into_iter().map(SkillResponse::from).collect()))
}

/// Search skills by free-text query and/or category (public)
pub async fn search_skills(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<SearchResponse>> {
    let results = SkillService::search(
        state.db(),
        query.q.as_deref().filter(|q| !q.is_empty()),
        query.category.as_deref().filter(|c| !c.is_empty()),
    )
    .await?;

    let total = results.len();

    Ok(Json(SearchResponse { results, total }))
}
