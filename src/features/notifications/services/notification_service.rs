use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::notifications::models::{Notification, NotificationType};
use crate::shared::types::PaginationQuery;

/// Service for admin notifications
pub struct NotificationService {
    pool: PgPool,
}

impl NotificationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fan out a notification for a newly submitted request. Runs on the
    /// caller's transaction connection so the notification commits with
    /// the report it announces.
    pub async fn notify_request(
        conn: &mut PgConnection,
        notification_type: NotificationType,
        request_id: Uuid,
        message: &str,
    ) -> Result<Notification> {
        Self::insert(conn, notification_type, Some(request_id), None, message).await
    }

    /// Fan out a notification for an inbound contact submission.
    pub async fn notify_contact(
        conn: &mut PgConnection,
        notification_type: NotificationType,
        contact_submission_id: Uuid,
        message: &str,
    ) -> Result<Notification> {
        Self::insert(
            conn,
            notification_type,
            None,
            Some(contact_submission_id),
            message,
        )
        .await
    }

    async fn insert(
        conn: &mut PgConnection,
        notification_type: NotificationType,
        request_id: Option<Uuid>,
        contact_submission_id: Option<Uuid>,
        message: &str,
    ) -> Result<Notification> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (notification_type, message, request_id, contact_submission_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, notification_type, message, request_id, contact_submission_id,
                      is_read, created_at
            "#,
        )
        .bind(notification_type)
        .bind(message)
        .bind(request_id)
        .bind(contact_submission_id)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create notification: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Notification created: id={}, type={}",
            notification.id,
            notification.notification_type
        );

        Ok(notification)
    }

    /// List notifications, newest first. Returns (notifications, total).
    pub async fn list(&self, pagination: &PaginationQuery) -> Result<(Vec<Notification>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notifications")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count notifications: {:?}", e);
                AppError::Database(e)
            })?;

        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT id, notification_type, message, request_id, contact_submission_id,
                   is_read, created_at
            FROM notifications
            ORDER BY created_at DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(pagination.offset())
        .bind(pagination.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list notifications: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((notifications, total))
    }

    pub async fn unread_count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notifications WHERE is_read = FALSE")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count unread notifications: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Mark one notification read. Idempotent: marking an already-read
    /// notification succeeds without change.
    pub async fn mark_read(&self, id: Uuid) -> Result<Notification> {
        sqlx::query_as::<_, Notification>(
            r#"
            UPDATE notifications
            SET is_read = TRUE
            WHERE id = $1
            RETURNING id, notification_type, message, request_id, contact_submission_id,
                      is_read, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to mark notification {} read: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))
    }

    /// Mark every unread notification read. Returns how many rows changed.
    pub async fn mark_all_read(&self) -> Result<u64> {
        let result = sqlx::query("UPDATE notifications SET is_read = TRUE WHERE is_read = FALSE")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to mark all notifications read: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected())
    }
}
