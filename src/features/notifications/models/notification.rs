use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Notification type enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "notification_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    LostReport,
    FoundReport,
    ContactSubmission,
    IssueReport,
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationType::LostReport => write!(f, "lost_report"),
            NotificationType::FoundReport => write!(f, "found_report"),
            NotificationType::ContactSubmission => write!(f, "contact_submission"),
            NotificationType::IssueReport => write!(f, "issue_report"),
        }
    }
}

/// Database model for a notification.
///
/// References either a request or a contact submission, never both; the
/// read flag is the only mutable column.
#[derive(Debug, Clone, FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub notification_type: NotificationType,
    pub message: String,
    pub request_id: Option<Uuid>,
    pub contact_submission_id: Option<Uuid>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
