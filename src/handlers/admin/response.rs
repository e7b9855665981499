//! Admin response DTOs

use serde::Serialize;
use sqlx::FromRow;

use crate::handlers::auth::response::UserResponse;

/// Skill count per category
#[derive(Debug, Serialize, FromRow)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Session count per status
#[derive(Debug, Serialize, FromRow)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// Aggregate platform statistics
#[derive(Debug, Serialize)]
pub struct PlatformStatsResponse {
    pub total_users: i64,
    pub total_skills: i64,
    pub total_sessions: i64,
    pub skills_by_category: Vec<CategoryCount>,
    pub sessions_by_status: Vec<StatusCount>,
}

/// Paginated user listing
#[derive(Debug, Serialize)]
pub struct AdminUsersListResponse {
    pub users: Vec<UserResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
