use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Submission type enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "submission_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SubmissionType {
    General,
    IssueReport,
}

impl std::fmt::Display for SubmissionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionType::General => write!(f, "general"),
            SubmissionType::IssueReport => write!(f, "issue_report"),
        }
    }
}

/// Submission status enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "submission_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Resolved,
}

/// Database model for a contact submission
#[derive(Debug, Clone, FromRow)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submission_type: SubmissionType,
    pub status: SubmissionStatus,
    pub user_id: Option<Uuid>,
    pub pet_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
