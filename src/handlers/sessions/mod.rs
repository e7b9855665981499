//! Learning-session handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

/// Session routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/request", post(handler::request_session))
        .route("/my", get(handler::get_my_sessions))
        .route("/{id}", patch(handler::update_session_status))
}
