use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Activity type enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "activity_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Created,
    Edited,
    StatusChanged,
    Deleted,
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityType::Created => write!(f, "created"),
            ActivityType::Edited => write!(f, "edited"),
            ActivityType::StatusChanged => write!(f, "status_changed"),
            ActivityType::Deleted => write!(f, "deleted"),
        }
    }
}

/// Database model for an activity log entry
#[derive(Debug, Clone, FromRow)]
pub struct ActivityLog {
    pub id: Uuid,
    pub pet_id: Option<Uuid>,
    pub activity_type: ActivityType,
    pub actor: String,
    pub details: String,
    pub created_at: DateTime<Utc>,
}
