use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::activity::models::{ActivityLog, ActivityType};
use crate::shared::constants::MAX_PAGE_SIZE;

/// Service for the per-pet audit trail
pub struct ActivityService {
    pool: PgPool,
}

impl ActivityService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append one entry. Takes the caller's transaction connection so the
    /// entry commits or rolls back with the mutation it records.
    pub async fn record(
        conn: &mut PgConnection,
        pet_id: Uuid,
        activity_type: ActivityType,
        actor: &str,
        details: &str,
    ) -> Result<ActivityLog> {
        let entry = sqlx::query_as::<_, ActivityLog>(
            r#"
            INSERT INTO activity_log (pet_id, activity_type, actor, details)
            VALUES ($1, $2, $3, $4)
            RETURNING id, pet_id, activity_type, actor, details, created_at
            "#,
        )
        .bind(pet_id)
        .bind(activity_type)
        .bind(actor)
        .bind(details)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to append activity entry: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::debug!(
            "Activity recorded: pet={}, type={}, actor={}",
            pet_id,
            activity_type,
            actor
        );

        Ok(entry)
    }

    /// Entries for one pet, newest first. `limit` selects the latest-N
    /// slice; absent means all (clamped to the page-size ceiling).
    pub async fn list_for_pet(
        &self,
        pet_id: Uuid,
        limit: Option<i64>,
    ) -> Result<Vec<ActivityLog>> {
        let limit = limit.unwrap_or(MAX_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

        sqlx::query_as::<_, ActivityLog>(
            r#"
            SELECT id, pet_id, activity_type, actor, details, created_at
            FROM activity_log
            WHERE pet_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(pet_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list activity for pet {}: {:?}", pet_id, e);
            AppError::Database(e)
        })
    }
}
