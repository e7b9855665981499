//! Authentication extractor
//!
//! Resolves the session cookie to a user on every request: cookie token ->
//! session store -> fresh user record. The admin flag is read from the
//! database each time rather than trusted from any cached source.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{constants::SESSION_COOKIE, db::repositories::UserRepository, error::AppError, state::AppState};

/// Authenticated user resolved from the session cookie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Unauthorized)?;

        let Some(cookie) = jar.get(SESSION_COOKIE) else {
            debug!(path = %parts.uri.path(), "Auth failed: no session cookie");
            return Err(AppError::Unauthorized);
        };

        let Some(user_id) = state.sessions().get(cookie.value()).await? else {
            debug!(path = %parts.uri.path(), "Auth failed: unknown or expired session token");
            return Err(AppError::Unauthorized);
        };

        // Session entries can outlive their user (admin deletion), so the
        // user record is loaded fresh on every request.
        let Some(user) = UserRepository::find_by_id(state.db(), &user_id).await? else {
            debug!(path = %parts.uri.path(), user_id = %user_id, "Auth failed: session for deleted user");
            return Err(AppError::Unauthorized);
        };

        debug!(
            path = %parts.uri.path(),
            user_id = %user.id,
            username = %user.username,
            "User authenticated successfully"
        );

        Ok(AuthenticatedUser {
            id: user.id,
            username: user.username,
            is_admin: user.is_admin,
        })
    }
}
