use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::activity::models::ActivityType;
use crate::features::activity::services::ActivityService;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::requests::models::{Request, RequestStatus};

const REQUEST_COLUMNS: &str = "id, user_id, pet_id, request_type, phone_number, message, status, \
                               reviewed_by, reviewed_at, created_at, updated_at";

/// The moderation state machine.
///
/// `pending` is decided once into `accepted` or `rejected`; decisions may
/// be corrected between the two terminal states; nothing returns to
/// `pending`. Same-state transitions are no-ops.
pub struct ModerationService {
    pool: PgPool,
}

impl ModerationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply an admin decision to a request.
    ///
    /// The status write and the `status_changed` activity entry share one
    /// transaction. The request row is locked first so concurrent
    /// decisions serialize; a request whose pet vanished concurrently
    /// surfaces as 404.
    pub async fn update_status(
        &self,
        moderator: &AuthenticatedUser,
        id: Uuid,
        target: RequestStatus,
    ) -> Result<Request> {
        let mut tx = self.pool.begin().await?;

        let request = sqlx::query_as::<_, Request>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM requests WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to lock request {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))?;

        let pet_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM pets WHERE id = $1)",
        )
        .bind(request.pet_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        if !pet_exists {
            return Err(AppError::NotFound(format!(
                "Pet for request {} no longer exists",
                id
            )));
        }

        // Idempotent: re-posting the current status changes nothing and
        // writes no activity entry.
        if request.status == target {
            return Ok(request);
        }

        if !request.status.can_transition_to(target) {
            return Err(AppError::Validation(format!(
                "Illegal status transition: {} -> {}",
                request.status, target
            )));
        }

        let old_status = request.status;

        let updated = sqlx::query_as::<_, Request>(&format!(
            r#"
            UPDATE requests
            SET status = $2, reviewed_by = $3, reviewed_at = NOW(), updated_at = NOW()
            WHERE id = $1
            RETURNING {REQUEST_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(target)
        .bind(&moderator.username)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update status of request {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        ActivityService::record(
            &mut tx,
            updated.pet_id,
            ActivityType::StatusChanged,
            &moderator.actor_tag(),
            &format!("{} -> {}", old_status, target),
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Request {} moderated: {} -> {} by {}",
            id,
            old_status,
            target,
            moderator.username
        );

        Ok(updated)
    }
}
