//! SkillSwap - Peer-to-Peer Skill Exchange Platform
//!
//! This library provides the core functionality for the SkillSwap platform,
//! where users list skills they offer or seek, find matching tutors, and
//! track learning sessions from request to review.
//!
//! # Features
//!
//! - User accounts with cookie-based sessions
//! - Skill listings (offering/seeking) with free-form categories
//! - Learning-session requests with a guarded status lifecycle
//! - Post-session reviews and derived profile badges
//! - Admin statistics and user management
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
