//! Authentication handler implementations

use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use crate::{
    constants::SESSION_COOKIE,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::AuthService,
    state::AppState,
};

use super::{
    request::{LoginRequest, RegisterRequest},
    response::{AuthResponse, CurrentUserResponse, LogoutResponse, RegisterResponse, UserResponse},
};

/// Build the session cookie carrying an opaque token
fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    // Validate request
    payload.validate()?;

    let user = AuthService::register(
        state.db(),
        &payload.username,
        &payload.email,
        &payload.password,
        payload.display_name.as_deref(),
    )
    .await?;

    let response = RegisterResponse {
        message: "User registered successfully".to_string(),
        user: UserResponse::from(user),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with username/email and password
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<AuthResponse>)> {
    // Validate request
    payload.validate()?;

    let (user, token) = AuthService::login(
        state.db(),
        state.sessions(),
        state.config(),
        &payload.identifier,
        &payload.password,
    )
    .await?;

    let response = AuthResponse {
        message: "Logged in successfully".to_string(),
        user: UserResponse::from(user),
    };

    Ok((jar.add(session_cookie(token)), Json(response)))
}

/// Logout (destroy the server-side session and clear the cookie)
pub async fn logout(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<LogoutResponse>)> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        AuthService::logout(state.sessions(), cookie.value()).await?;
    }

    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();

    Ok((
        jar.remove(removal),
        Json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        }),
    ))
}

/// Get current authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<CurrentUserResponse>> {
    let user = AuthService::get_user_by_id(state.db(), &auth_user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(CurrentUserResponse {
        user: UserResponse::from(user),
    }))
}
