//! Review handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Review routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(handler::create_review))
}
