//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Name of the cookie carrying the opaque session token
pub const SESSION_COOKIE: &str = "skillswap_session";

/// Default authentication session expiry in hours
pub const DEFAULT_SESSION_EXPIRY_HOURS: i64 = 24;

/// Length of generated session tokens
pub const SESSION_TOKEN_LENGTH: usize = 48;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

// =============================================================================
// SKILL VOCABULARY
// =============================================================================

/// Skill type discriminators
pub mod skill_types {
    pub const OFFERING: &str = "offering";
    pub const SEEKING: &str = "seeking";

    /// All skill types
    pub const ALL: &[&str] = &[OFFERING, SEEKING];
}

/// Experience level identifiers
pub mod experience_levels {
    pub const BEGINNER: &str = "beginner";
    pub const INTERMEDIATE: &str = "intermediate";
    pub const ADVANCED: &str = "advanced";

    /// All experience levels
    pub const ALL: &[&str] = &[BEGINNER, INTERMEDIATE, ADVANCED];
}

// =============================================================================
// REVIEWS
// =============================================================================

/// Minimum review rating
pub const MIN_RATING: i32 = 1;

/// Maximum review rating
pub const MAX_RATING: i32 = 5;

// =============================================================================
// BADGE THRESHOLDS
// =============================================================================

/// Thresholds for derived profile badges
pub mod badges {
    /// Completed sessions (as provider) required for the top_tutor badge
    pub const TOP_TUTOR_MIN_COMPLETED: i64 = 5;

    /// Offered skills required for the skill_master badge
    pub const SKILL_MASTER_MIN_OFFERINGS: i64 = 3;

    /// Average received rating required for the highly_rated badge
    pub const HIGHLY_RATED_MIN_AVERAGE: f64 = 4.5;

    /// Received reviews required for the highly_rated badge
    pub const HIGHLY_RATED_MIN_REVIEWS: i64 = 3;
}

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Rate limiting configuration
pub mod rate_limits {
    /// Auth endpoint - max requests
    pub const AUTH_MAX_REQUESTS: i64 = 5;
    /// Auth endpoint - window in seconds
    pub const AUTH_WINDOW_SECS: i64 = 60;

    /// Session endpoint - max requests
    pub const SESSION_MAX_REQUESTS: i64 = 30;
    /// Session endpoint - window in seconds
    pub const SESSION_WINDOW_SECS: i64 = 60;

    /// General API - max requests
    pub const GENERAL_MAX_REQUESTS: i64 = 100;
    /// General API - window in seconds
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum skill name length
pub const MAX_SKILL_NAME_LENGTH: u64 = 128;

/// Maximum skill description length
pub const MAX_SKILL_DESCRIPTION_LENGTH: u64 = 2000;

/// Maximum category tag length
pub const MAX_CATEGORY_LENGTH: u64 = 64;

/// Maximum session request message length
pub const MAX_SESSION_MESSAGE_LENGTH: u64 = 2000;

/// Maximum review comment length
pub const MAX_REVIEW_COMMENT_LENGTH: u64 = 2000;

/// Maximum display name length
pub const MAX_DISPLAY_NAME_LENGTH: u64 = 100;

/// Maximum bio length
pub const MAX_BIO_LENGTH: u64 = 1000;
