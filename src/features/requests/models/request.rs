use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request type enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "request_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    Lost,
    Found,
    Adoption,
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestType::Lost => write!(f, "lost"),
            RequestType::Found => write!(f, "found"),
            RequestType::Adoption => write!(f, "adoption"),
        }
    }
}

/// Moderation status enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "request_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl RequestStatus {
    /// Legal moderation transitions: a pending request is decided once,
    /// decisions may be corrected between accepted and rejected, and
    /// nothing returns to pending.
    pub fn can_transition_to(self, target: RequestStatus) -> bool {
        match (self, target) {
            (RequestStatus::Pending, RequestStatus::Accepted) => true,
            (RequestStatus::Pending, RequestStatus::Rejected) => true,
            (RequestStatus::Accepted, RequestStatus::Rejected) => true,
            (RequestStatus::Rejected, RequestStatus::Accepted) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::Accepted => write!(f, "accepted"),
            RequestStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = String;

    /// Case-insensitive: admin dashboards post "Accepted" and "accepted"
    /// interchangeably.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "accepted" => Ok(RequestStatus::Accepted),
            "rejected" => Ok(RequestStatus::Rejected),
            other => Err(format!("Unknown request status: {}", other)),
        }
    }
}

/// Database model for a moderation request
#[derive(Debug, Clone, FromRow)]
pub struct Request {
    pub id: Uuid,
    pub user_id: Uuid,
    pub pet_id: Uuid,
    pub request_type: RequestType,
    pub phone_number: Option<String>,
    pub message: Option<String>,
    pub status: RequestStatus,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_transitions_from_pending() {
        assert!(RequestStatus::Pending.can_transition_to(RequestStatus::Accepted));
        assert!(RequestStatus::Pending.can_transition_to(RequestStatus::Rejected));
        assert!(!RequestStatus::Pending.can_transition_to(RequestStatus::Pending));
    }

    #[test]
    fn test_decisions_can_be_corrected() {
        assert!(RequestStatus::Accepted.can_transition_to(RequestStatus::Rejected));
        assert!(RequestStatus::Rejected.can_transition_to(RequestStatus::Accepted));
    }

    #[test]
    fn test_nothing_returns_to_pending() {
        assert!(!RequestStatus::Accepted.can_transition_to(RequestStatus::Pending));
        assert!(!RequestStatus::Rejected.can_transition_to(RequestStatus::Pending));
    }

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!(
            RequestStatus::from_str("Accepted").unwrap(),
            RequestStatus::Accepted
        );
        assert_eq!(
            RequestStatus::from_str(" REJECTED ").unwrap(),
            RequestStatus::Rejected
        );
        assert!(RequestStatus::from_str("archived").is_err());
    }
}
