//! Session model and status lifecycle
//!
//! A session is a learning engagement requested by one user (the requester)
//! against a skill offered by another (the provider). Status changes are
//! governed by a fixed transition table: authorization is per-edge, not
//! per-role, and both terminal states (`completed`, `cancelled`) have no
//! outgoing edges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Session database model (a learning-session request, not an auth session)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub provider_id: Uuid,
    pub skill_id: Uuid,
    pub status: String,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Which side of the session a user is on, if any
    pub fn role_of(&self, user_id: &Uuid) -> Option<SessionRole> {
        if self.requester_id == *user_id {
            Some(SessionRole::Requester)
        } else if self.provider_id == *user_id {
            Some(SessionRole::Provider)
        } else {
            None
        }
    }

    /// The participant opposite the given one
    pub fn other_participant(&self, user_id: &Uuid) -> Option<Uuid> {
        match self.role_of(user_id)? {
            SessionRole::Requester => Some(self.provider_id),
            SessionRole::Provider => Some(self.requester_id),
        }
    }
}

/// A participant's side of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRole {
    Requester,
    Provider,
}

impl std::fmt::Display for SessionRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Requester => write!(f, "requester"),
            Self::Provider => write!(f, "provider"),
        }
    }
}

/// Session status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Pending,
    Accepted,
    Completed,
    Cancelled,
}

impl SessionStatus {
    /// Get status as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse status from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Check if no further transitions are possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// The transition table: may `actor` move a session from `self` to `to`?
    ///
    /// Only the provider accepts and completes; either participant may
    /// cancel, but only while the session is still pending. There is
    /// intentionally no `accepted -> cancelled` edge.
    pub fn may_transition_to(&self, to: SessionStatus, actor: SessionRole) -> bool {
        match (self, to) {
            (Self::Pending, Self::Accepted) => actor == SessionRole::Provider,
            (Self::Accepted, Self::Completed) => actor == SessionRole::Provider,
            (Self::Pending, Self::Cancelled) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::SessionRole::{Provider, Requester};
    use super::SessionStatus::{Accepted, Cancelled, Completed, Pending};
    use super::*;

    const ALL_STATUSES: [SessionStatus; 4] = [Pending, Accepted, Completed, Cancelled];

    #[test]
    fn test_status_round_trip() {
        for status in ALL_STATUSES {
            assert_eq!(SessionStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(SessionStatus::from_str("declined"), None);
        assert_eq!(SessionStatus::from_str(""), None);
    }

    #[test]
    fn test_only_provider_accepts() {
        assert!(Pending.may_transition_to(Accepted, Provider));
        assert!(!Pending.may_transition_to(Accepted, Requester));
    }

    #[test]
    fn test_only_provider_completes() {
        assert!(Accepted.may_transition_to(Completed, Provider));
        assert!(!Accepted.may_transition_to(Completed, Requester));
    }

    #[test]
    fn test_either_participant_cancels_pending() {
        assert!(Pending.may_transition_to(Cancelled, Requester));
        assert!(Pending.may_transition_to(Cancelled, Provider));
    }

    #[test]
    fn test_accepted_sessions_cannot_be_cancelled() {
        assert!(!Accepted.may_transition_to(Cancelled, Requester));
        assert!(!Accepted.may_transition_to(Cancelled, Provider));
    }

    #[test]
    fn test_terminal_states_have_no_outgoing_edges() {
        for from in [Completed, Cancelled] {
            assert!(from.is_terminal());
            for to in ALL_STATUSES {
                for actor in [Requester, Provider] {
                    assert!(!from.may_transition_to(to, actor));
                }
            }
        }
    }

    #[test]
    fn test_full_table_sweep() {
        // Everything not named in the table is rejected for both actors.
        let allowed = [
            (Pending, Accepted, Provider),
            (Accepted, Completed, Provider),
            (Pending, Cancelled, Requester),
            (Pending, Cancelled, Provider),
        ];

        for from in ALL_STATUSES {
            for to in ALL_STATUSES {
                for actor in [Requester, Provider] {
                    let expected = allowed.contains(&(from, to, actor));
                    assert_eq!(
                        from.may_transition_to(to, actor),
                        expected,
                        "{from} -> {to} as {actor}"
                    );
                }
            }
        }
    }

    fn session_between(requester: Uuid, provider: Uuid) -> Session {
        Session {
            id: Uuid::new_v4(),
            requester_id: requester,
            provider_id: provider,
            skill_id: Uuid::new_v4(),
            status: Pending.as_str().to_string(),
            scheduled_at: None,
            message: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_of_participants() {
        let requester = Uuid::new_v4();
        let provider = Uuid::new_v4();
        let session = session_between(requester, provider);

        assert_eq!(session.role_of(&requester), Some(Requester));
        assert_eq!(session.role_of(&provider), Some(Provider));
        assert_eq!(session.role_of(&Uuid::new_v4()), None);
    }

    #[test]
    fn test_other_participant() {
        let requester = Uuid::new_v4();
        let provider = Uuid::new_v4();
        let session = session_between(requester, provider);

        assert_eq!(session.other_participant(&requester), Some(provider));
        assert_eq!(session.other_participant(&provider), Some(requester));
        assert_eq!(session.other_participant(&Uuid::new_v4()), None);
    }
}
