//! Admin request DTOs

use serde::Deserialize;

/// Toggle a user's admin flag
#[derive(Debug, Deserialize)]
pub struct UpdateUserRoleRequest {
    pub is_admin: bool,
}

/// List users query parameters
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
}
