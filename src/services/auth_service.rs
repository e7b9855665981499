//! Authentication service

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Duration;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::Config,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    services::session_store::AuthSessionStore,
    utils::{crypto, validation},
};

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user
    pub async fn register(
        pool: &PgPool,
        username: &str,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> AppResult<User> {
        validation::validate_username(username)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_password(password)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        // Check if username exists
        if UserRepository::find_by_username(pool, username).await?.is_some() {
            return Err(AppError::AlreadyExists("Username already taken".to_string()));
        }

        // Check if email exists
        if UserRepository::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        // Hash password
        let password_hash = Self::hash_password(password)?;

        let user =
            UserRepository::create(pool, username, email, &password_hash, display_name).await?;

        Ok(user)
    }

    /// Login with username/email and password, issuing an auth session token
    pub async fn login(
        pool: &PgPool,
        sessions: &dyn AuthSessionStore,
        config: &Config,
        identifier: &str,
        password: &str,
    ) -> AppResult<(User, String)> {
        // Find user
        let user = UserRepository::find_by_identifier(pool, identifier)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // Verify password
        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        // Issue the server-side session
        let token = crypto::generate_session_token();
        sessions
            .create(
                &token,
                user.id,
                Duration::hours(config.auth.session_expiry_hours),
            )
            .await?;

        Ok((user, token))
    }

    /// Logout (destroy the server-side session)
    pub async fn logout(sessions: &dyn AuthSessionStore, token: &str) -> AppResult<()> {
        sessions.destroy(token).await
    }

    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, user_id: &Uuid) -> AppResult<Option<User>> {
        UserRepository::find_by_id(pool, user_id).await
    }

    /// Hash password using Argon2
    pub(crate) fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    pub(crate) fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
