//! Admin handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, patch},
};

use crate::state::AppState;

/// Admin routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(handler::get_platform_stats))
        .route("/users", get(handler::list_users))
        .route("/users/{id}/role", patch(handler::update_user_role))
        .route("/users/{id}", delete(handler::delete_user))
}
