//! Input validation utilities

use crate::constants;

/// Validate username format
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters");
    }
    if username.len() > 32 {
        return Err("Username must be at most 32 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err("Username can only contain letters, numbers, underscores, and hyphens");
    }
    if !username.chars().next().map(|c| c.is_alphabetic()).unwrap_or(false) {
        return Err("Username must start with a letter");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_numeric()) {
        return Err("Password must contain at least one number");
    }
    Ok(())
}

/// Validate skill type discriminator
pub fn validate_skill_type(skill_type: &str) -> Result<(), &'static str> {
    if constants::skill_types::ALL.contains(&skill_type) {
        Ok(())
    } else {
        Err("Skill type must be 'offering' or 'seeking'")
    }
}

/// Validate experience level
pub fn validate_experience_level(level: &str) -> Result<(), &'static str> {
    if constants::experience_levels::ALL.contains(&level) {
        Ok(())
    } else {
        Err("Experience level must be 'beginner', 'intermediate', or 'advanced'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("alice_b-99").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("9lives").is_err());
        assert!(validate_username("has space").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Sup3rSecret").is_ok());
        assert!(validate_password("short1A").is_err());
        assert!(validate_password("nouppercase1").is_err());
        assert!(validate_password("NOLOWERCASE1").is_err());
        assert!(validate_password("NoNumbersHere").is_err());
    }

    #[test]
    fn test_validate_skill_type() {
        assert!(validate_skill_type("offering").is_ok());
        assert!(validate_skill_type("seeking").is_ok());
        assert!(validate_skill_type("wanting").is_err());
    }

    #[test]
    fn test_validate_experience_level() {
        assert!(validate_experience_level("beginner").is_ok());
        assert!(validate_experience_level("advanced").is_ok());
        assert!(validate_experience_level("guru").is_err());
    }
}
