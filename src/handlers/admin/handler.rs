//! Admin handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    handlers::auth::response::UserResponse,
    middleware::auth::AuthenticatedUser,
    services::AdminService,
    state::AppState,
};

use super::{
    request::{ListUsersQuery, UpdateUserRoleRequest},
    response::{AdminUsersListResponse, PlatformStatsResponse},
};

/// Verify user is admin; the flag was freshly loaded by the auth extractor
fn require_admin(auth_user: &AuthenticatedUser) -> AppResult<()> {
    if !auth_user.is_admin {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }
    Ok(())
}

/// Aggregate platform statistics
pub async fn get_platform_stats(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<PlatformStatsResponse>> {
    require_admin(&auth_user)?;

    let stats = AdminService::get_platform_stats(state.db()).await?;

    Ok(Json(stats))
}

/// List all users with pagination
pub async fn list_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<AdminUsersListResponse>> {
    require_admin(&auth_user)?;

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (users, total) =
        AdminService::list_users(state.db(), page, per_page, query.search.as_deref()).await?;

    Ok(Json(AdminUsersListResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
        total,
        page,
        per_page,
    }))
}

/// Toggle a user's admin flag
pub async fn update_user_role(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRoleRequest>,
) -> AppResult<Json<UserResponse>> {
    require_admin(&auth_user)?;

    // Admins cannot revoke their own access
    if id == auth_user.id && !payload.is_admin {
        return Err(AppError::Validation(
            "Cannot remove your own admin role".to_string(),
        ));
    }

    let user = AdminService::set_user_role(state.db(), &id, payload.is_admin).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Delete a user (cascades to skills, sessions, and reviews)
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&auth_user)?;

    // Cannot delete yourself
    if id == auth_user.id {
        return Err(AppError::Validation(
            "Cannot delete your own account".to_string(),
        ));
    }

    AdminService::delete_user(state.db(), &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
