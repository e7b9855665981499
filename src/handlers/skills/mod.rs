//! Skill listing and search handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Skill routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_skill))
        .route("/my", get(handler::get_my_skills))
        .route("/{id}", delete(handler::delete_skill))
}

/// Public search routes (mounted at the API root)
pub fn search_routes() -> Router<AppState> {
    Router::new().route("/search", get(handler::search_skills))
}
