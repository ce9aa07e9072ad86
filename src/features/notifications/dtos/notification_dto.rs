use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::notifications::models::{Notification, NotificationType};

/// Response DTO for a notification
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationResponseDto {
    pub id: Uuid,
    pub notification_type: NotificationType,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_submission_id: Option<Uuid>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponseDto {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            notification_type: n.notification_type,
            message: n.message,
            request_id: n.request_id,
            contact_submission_id: n.contact_submission_id,
            is_read: n.is_read,
            created_at: n.created_at,
        }
    }
}

/// Response DTO for the unread counter
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UnreadCountDto {
    pub unread: i64,
}

/// Response DTO for bulk mark-read
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MarkAllReadResponseDto {
    /// Number of notifications that changed from unread to read
    pub marked: u64,
}
