//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod health;
pub mod reviews;
pub mod sessions;
pub mod skills;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(skills::search_routes())
        .nest("/auth", auth::routes())
        .nest("/users", users::routes())
        .nest("/skills", skills::routes())
        .nest("/sessions", sessions::routes())
        .nest("/reviews", reviews::routes())
        .nest("/admin", admin::routes())
}
