//! HTTP middleware

pub mod auth;
pub mod rate_limit;

pub use auth::AuthenticatedUser;
pub use rate_limit::rate_limit_middleware;
