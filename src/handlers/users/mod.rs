//! User profile handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

/// User routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(handler::get_user))
        .route("/{id}", put(handler::update_user))
        .route("/{id}/reviews", get(handler::get_user_reviews))
}
