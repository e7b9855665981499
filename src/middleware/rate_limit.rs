//! Rate limiting middleware

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use redis::AsyncCommands;
use std::net::SocketAddr;

use crate::{constants, error::AppError, state::AppState};

/// Rate limit middleware
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let ip = addr.ip().to_string();
    let path = request.uri().path().to_string();

    // Determine rate limit based on path
    let (limit, window) = get_rate_limit(&path);

    // Check rate limit
    let key = format!("rate_limit:{}:{}", ip, path_bucket(&path));
    let mut redis = state.redis();

    let count: i64 = redis.incr(&key, 1).await.unwrap_or(0);

    if count == 1 {
        // Set expiry on first request
        let _: () = redis.expire(&key, window).await.unwrap_or(());
    }

    if count > limit {
        return Err(AppError::TooManyRequests);
    }

    Ok(next.run(request).await)
}

/// Get rate limit for a path
fn get_rate_limit(path: &str) -> (i64, i64) {
    if path.starts_with("/api/auth") {
        (
            constants::rate_limits::AUTH_MAX_REQUESTS,
            constants::rate_limits::AUTH_WINDOW_SECS,
        )
    } else if path.starts_with("/api/sessions") {
        (
            constants::rate_limits::SESSION_MAX_REQUESTS,
            constants::rate_limits::SESSION_WINDOW_SECS,
        )
    } else {
        (
            constants::rate_limits::GENERAL_MAX_REQUESTS,
            constants::rate_limits::GENERAL_WINDOW_SECS,
        )
    }
}

/// Get bucket for path (for grouping similar endpoints)
fn path_bucket(path: &str) -> &str {
    if path.starts_with("/api/auth") {
        "auth"
    } else if path.starts_with("/api/sessions") {
        "sessions"
    } else if path.starts_with("/api/reviews") {
        "reviews"
    } else if path.starts_with("/api/skills") || path.starts_with("/api/search") {
        "skills"
    } else {
        "general"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_buckets() {
        assert_eq!(path_bucket("/api/auth/login"), "auth");
        assert_eq!(path_bucket("/api/sessions/my"), "sessions");
        assert_eq!(path_bucket("/api/search"), "skills");
        assert_eq!(path_bucket("/api/admin/stats"), "general");
    }

    #[test]
    fn test_auth_bucket_is_strictest() {
        let (auth_limit, _) = get_rate_limit("/api/auth/login");
        let (general_limit, _) = get_rate_limit("/api/users/someone");
        assert!(auth_limit < general_limit);
    }
}
