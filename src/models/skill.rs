//! Skill model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Skill database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub skill_type: String,
    pub experience_level: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Skill type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillType {
    Offering,
    Seeking,
}

impl SkillType {
    /// Get skill type as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offering => "offering",
            Self::Seeking => "seeking",
        }
    }

    /// Parse skill type from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "offering" => Some(Self::Offering),
            "seeking" => Some(Self::Seeking),
            _ => None,
        }
    }
}

impl std::fmt::Display for SkillType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Self-assessed experience level for a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// Get experience level as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Parse experience level from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_type_round_trip() {
        assert_eq!(SkillType::from_str("offering"), Some(SkillType::Offering));
        assert_eq!(SkillType::from_str("seeking"), Some(SkillType::Seeking));
        assert_eq!(SkillType::from_str("teaching"), None);
        assert_eq!(SkillType::Offering.as_str(), "offering");
    }

    #[test]
    fn test_experience_level_round_trip() {
        assert_eq!(
            ExperienceLevel::from_str("intermediate"),
            Some(ExperienceLevel::Intermediate)
        );
        assert_eq!(ExperienceLevel::from_str("expert"), None);
        assert_eq!(ExperienceLevel::Advanced.as_str(), "advanced");
    }
}
