use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::pets::models::{PetStatus, PetType};
use crate::features::requests::models::{RequestStatus, RequestType};

/// A moderation queue row: request, pet and reporter in one view
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AdminRequestDto {
    pub id: Uuid,
    pub request_type: RequestType,
    pub status: RequestStatus,
    pub phone_number: Option<String>,
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub pet_id: Uuid,
    pub pet_name: Option<String>,
    pub pet_type: PetType,
    pub breed: String,
    pub color: String,
    pub location: String,
    pub pet_status: PetStatus,
    pub reporter_username: String,
    pub reporter_email: String,
}

/// Query parameters for the moderation queue
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct RequestQueueQuery {
    /// Filter by moderation status (pending, accepted, rejected)
    pub status: Option<String>,
}

/// Summary counts for the admin dashboard header
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminSummaryDto {
    pub total_requests: i64,
    pub pending_requests: i64,
    pub accepted_requests: i64,
    pub rejected_requests: i64,
    pub lost_pets: i64,
    pub found_pets: i64,
    pub adopted_pets: i64,
    pub adoptable_pets: i64,
    pub unread_notifications: i64,
}
