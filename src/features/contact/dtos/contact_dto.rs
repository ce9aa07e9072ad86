use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::contact::models::{
    ContactSubmission, SubmissionStatus, SubmissionType,
};

/// Request DTO for a contact submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateContactDto {
    #[validate(length(min = 1, max = 150, message = "Name must be 1-150 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 200, message = "Subject must be 1-200 characters"))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,

    pub submission_type: SubmissionType,

    /// Pet the issue is about; required for issue reports
    pub pet_id: Option<Uuid>,
}

/// Response DTO for a contact submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactResponseDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submission_type: SubmissionType,
    pub status: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<ContactSubmission> for ContactResponseDto {
    fn from(c: ContactSubmission) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            subject: c.subject,
            message: c.message,
            submission_type: c.submission_type,
            status: c.status,
            user_id: c.user_id,
            pet_id: c.pet_id,
            created_at: c.created_at,
        }
    }
}
