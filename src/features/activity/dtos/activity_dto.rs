use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::activity::models::{ActivityLog, ActivityType};

/// Response DTO for an activity log entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActivityResponseDto {
    pub id: Uuid,
    pub pet_id: Option<Uuid>,
    pub activity_type: ActivityType,
    pub actor: String,
    pub details: String,
    pub created_at: DateTime<Utc>,
}

impl From<ActivityLog> for ActivityResponseDto {
    fn from(a: ActivityLog) -> Self {
        Self {
            id: a.id,
            pet_id: a.pet_id,
            activity_type: a.activity_type,
            actor: a.actor,
            details: a.details,
            created_at: a.created_at,
        }
    }
}
