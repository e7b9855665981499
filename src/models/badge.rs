//! Derived profile badges
//!
//! Badges are never persisted: they are recomputed from current counts
//! wherever a profile is displayed, so server and client copies always
//! agree.

use serde::{Deserialize, Serialize};

use crate::constants::badges;

/// A derived profile badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    TopTutor,
    SkillMaster,
    GettingStarted,
    HighlyRated,
}

impl Badge {
    /// Get badge as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopTutor => "top_tutor",
            Self::SkillMaster => "skill_master",
            Self::GettingStarted => "getting_started",
            Self::HighlyRated => "highly_rated",
        }
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The per-user counts badge derivation is a function of
#[derive(Debug, Clone, Copy, Default)]
pub struct BadgeCounts {
    pub total_skills: i64,
    pub offering_skills: i64,
    pub completed_sessions: i64,
    pub review_count: i64,
    pub average_rating: Option<f64>,
}

/// Derive the badge set for a user from their current counts.
///
/// Deterministic and order-independent: the same counts always produce the
/// same badges, listed in a fixed order.
pub fn derive_badges(counts: &BadgeCounts) -> Vec<Badge> {
    let mut earned = Vec::new();

    if counts.completed_sessions >= badges::TOP_TUTOR_MIN_COMPLETED {
        earned.push(Badge::TopTutor);
    }
    if counts.offering_skills >= badges::SKILL_MASTER_MIN_OFFERINGS {
        earned.push(Badge::SkillMaster);
    }
    if counts.total_skills > 0 {
        earned.push(Badge::GettingStarted);
    }
    if counts.review_count >= badges::HIGHLY_RATED_MIN_REVIEWS
        && counts
            .average_rating
            .is_some_and(|avg| avg >= badges::HIGHLY_RATED_MIN_AVERAGE)
    {
        earned.push(Badge::HighlyRated);
    }

    earned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_activity_no_badges() {
        assert!(derive_badges(&BadgeCounts::default()).is_empty());
    }

    #[test]
    fn test_getting_started_needs_any_skill() {
        let counts = BadgeCounts {
            total_skills: 1,
            ..Default::default()
        };
        assert_eq!(derive_badges(&counts), vec![Badge::GettingStarted]);
    }

    #[test]
    fn test_top_tutor_threshold_is_exact() {
        let mut counts = BadgeCounts {
            completed_sessions: 4,
            ..Default::default()
        };
        assert!(!derive_badges(&counts).contains(&Badge::TopTutor));

        counts.completed_sessions = 5;
        assert!(derive_badges(&counts).contains(&Badge::TopTutor));
    }

    #[test]
    fn test_skill_master_counts_offerings_only() {
        let counts = BadgeCounts {
            total_skills: 5,
            offering_skills: 2,
            ..Default::default()
        };
        assert!(!derive_badges(&counts).contains(&Badge::SkillMaster));

        let counts = BadgeCounts {
            total_skills: 3,
            offering_skills: 3,
            ..Default::default()
        };
        assert!(derive_badges(&counts).contains(&Badge::SkillMaster));
    }

    #[test]
    fn test_highly_rated_needs_both_average_and_volume() {
        // High average, too few reviews
        let counts = BadgeCounts {
            review_count: 2,
            average_rating: Some(5.0),
            ..Default::default()
        };
        assert!(!derive_badges(&counts).contains(&Badge::HighlyRated));

        // Enough reviews, average too low
        let counts = BadgeCounts {
            review_count: 3,
            average_rating: Some(4.4),
            ..Default::default()
        };
        assert!(!derive_badges(&counts).contains(&Badge::HighlyRated));

        // Both thresholds met (boundary average)
        let counts = BadgeCounts {
            review_count: 3,
            average_rating: Some(4.5),
            ..Default::default()
        };
        assert!(derive_badges(&counts).contains(&Badge::HighlyRated));
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let counts = BadgeCounts {
            total_skills: 4,
            offering_skills: 3,
            completed_sessions: 7,
            review_count: 5,
            average_rating: Some(4.8),
        };

        let first = derive_badges(&counts);
        let second = derive_badges(&counts);
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                Badge::TopTutor,
                Badge::SkillMaster,
                Badge::GettingStarted,
                Badge::HighlyRated,
            ]
        );
    }
}
