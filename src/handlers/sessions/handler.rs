//! Session handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::SessionService,
    state::AppState,
};

use super::{
    request::{RequestSessionRequest, UpdateSessionStatusRequest},
    response::{MySessionsResponse, SessionResponse},
};

/// Request a learning session against a provider's skill
pub async fn request_session(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<RequestSessionRequest>,
) -> AppResult<(StatusCode, Json<SessionResponse>)> {
    // Validate request
    payload.validate()?;

    let session = SessionService::request_session(
        state.db(),
        &auth_user.id,
        &payload.provider_id,
        &payload.skill_id,
        payload.message.as_deref(),
        payload.scheduled_at,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(SessionResponse::from(session))))
}

/// Transition a session's status (per-edge authorization)
pub async fn update_session_status(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSessionStatusRequest>,
) -> AppResult<Json<SessionResponse>> {
    let session =
        SessionService::transition_status(state.db(), &id, &payload.status, &auth_user.id).await?;

    Ok(Json(SessionResponse::from(session)))
}

/// List the caller's sessions, enriched with participants and skill
pub async fn get_my_sessions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<MySessionsResponse>> {
    let sessions = SessionService::list_for_user(state.db(), &auth_user.id).await?;
    let total = sessions.len();

    Ok(Json(MySessionsResponse { sessions, total }))
}
