use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::contact::dtos::CreateContactDto;
use crate::features::contact::models::{ContactSubmission, SubmissionType};
use crate::features::notifications::models::NotificationType;
use crate::features::notifications::services::NotificationService;
use crate::shared::types::PaginationQuery;

const CONTACT_COLUMNS: &str = "id, name, email, subject, message, submission_type, status, \
                               user_id, pet_id, created_at";

/// Service for inbound contact submissions
pub struct ContactService {
    pool: PgPool,
}

impl ContactService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a submission and fan out the admin notification in one
    /// transaction. Issue reports must reference an existing pet.
    pub async fn create(
        &self,
        dto: CreateContactDto,
        user_id: Option<Uuid>,
    ) -> Result<ContactSubmission> {
        if dto.submission_type == SubmissionType::IssueReport && dto.pet_id.is_none() {
            return Err(AppError::Validation(
                "Issue reports must reference a pet".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        if let Some(pet_id) = dto.pet_id {
            let pet_exists =
                sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM pets WHERE id = $1)")
                    .bind(pet_id)
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(AppError::Database)?;

            if !pet_exists {
                return Err(AppError::NotFound(format!("Pet {} not found", pet_id)));
            }
        }

        let submission = sqlx::query_as::<_, ContactSubmission>(&format!(
            r#"
            INSERT INTO contact_submissions (name, email, subject, message, submission_type,
                                             user_id, pet_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {CONTACT_COLUMNS}
            "#
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.subject)
        .bind(&dto.message)
        .bind(dto.submission_type)
        .bind(user_id)
        .bind(dto.pet_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create contact submission: {:?}", e);
            AppError::Database(e)
        })?;

        let notification_type = match submission.submission_type {
            SubmissionType::General => NotificationType::ContactSubmission,
            SubmissionType::IssueReport => NotificationType::IssueReport,
        };

        NotificationService::notify_contact(
            &mut tx,
            notification_type,
            submission.id,
            &contact_notification_message(&submission),
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Contact submission created: id={}, type={}",
            submission.id,
            submission.submission_type
        );

        Ok(submission)
    }

    /// List submissions, newest first. Returns (submissions, total).
    pub async fn list(
        &self,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<ContactSubmission>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contact_submissions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count contact submissions: {:?}", e);
                AppError::Database(e)
            })?;

        let submissions = sqlx::query_as::<_, ContactSubmission>(&format!(
            r#"
            SELECT {CONTACT_COLUMNS}
            FROM contact_submissions
            ORDER BY created_at DESC
            OFFSET $1 LIMIT $2
            "#
        ))
        .bind(pagination.offset())
        .bind(pagination.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list contact submissions: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((submissions, total))
    }
}

/// Admin-facing message announcing an inbound submission.
fn contact_notification_message(submission: &ContactSubmission) -> String {
    match submission.submission_type {
        SubmissionType::General => format!(
            "New contact message from {}: {}",
            submission.name, submission.subject
        ),
        SubmissionType::IssueReport => format!(
            "New issue report from {}: {}",
            submission.name, submission.subject
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::features::contact::models::SubmissionStatus;

    fn submission(submission_type: SubmissionType) -> ContactSubmission {
        ContactSubmission {
            id: Uuid::new_v4(),
            name: "Maya".to_string(),
            email: "maya@example.com".to_string(),
            subject: "Wrong breed listed".to_string(),
            message: "The listing says beagle but the photo shows a corgi".to_string(),
            submission_type,
            status: SubmissionStatus::Pending,
            user_id: None,
            pet_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_issue_report_message() {
        let msg = contact_notification_message(&submission(SubmissionType::IssueReport));
        assert_eq!(msg, "New issue report from Maya: Wrong breed listed");
    }

    #[test]
    fn test_general_message() {
        let msg = contact_notification_message(&submission(SubmissionType::General));
        assert!(msg.starts_with("New contact message from Maya"));
    }
}
