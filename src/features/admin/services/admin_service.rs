use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::{AdminRequestDto, AdminSummaryDto};
use crate::features::requests::models::RequestStatus;
use crate::shared::types::PaginationQuery;

const QUEUE_COLUMNS: &str = r#"
    r.id, r.request_type, r.status, r.phone_number, r.message,
    r.reviewed_by, r.reviewed_at, r.created_at,
    p.id AS pet_id, p.name AS pet_name, p.pet_type, p.breed, p.color, p.location,
    p.status AS pet_status,
    u.username AS reporter_username, u.email AS reporter_email
"#;

/// Service for admin queue and summary queries
pub struct AdminService {
    pool: PgPool,
}

impl AdminService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Moderation queue with pet and reporter, optionally filtered by
    /// status, newest first. Returns (rows, total).
    pub async fn list_requests(
        &self,
        status: Option<RequestStatus>,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<AdminRequestDto>, i64)> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM requests r
            WHERE ($1::request_status IS NULL OR r.status = $1)
            "#,
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count requests: {:?}", e);
            AppError::Database(e)
        })?;

        let rows = sqlx::query_as::<_, AdminRequestDto>(&format!(
            r#"
            SELECT {QUEUE_COLUMNS}
            FROM requests r
            INNER JOIN pets p ON p.id = r.pet_id
            INNER JOIN users u ON u.id = r.user_id
            WHERE ($1::request_status IS NULL OR r.status = $1)
            ORDER BY r.created_at DESC
            OFFSET $2 LIMIT $3
            "#
        ))
        .bind(status)
        .bind(pagination.offset())
        .bind(pagination.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list request queue: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((rows, total))
    }

    pub async fn get_request(&self, id: Uuid) -> Result<AdminRequestDto> {
        sqlx::query_as::<_, AdminRequestDto>(&format!(
            r#"
            SELECT {QUEUE_COLUMNS}
            FROM requests r
            INNER JOIN pets p ON p.id = r.pet_id
            INNER JOIN users u ON u.id = r.user_id
            WHERE r.id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get request {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Dashboard header counts.
    pub async fn summary(&self) -> Result<AdminSummaryDto> {
        let (total_requests, pending_requests, accepted_requests, rejected_requests) =
            sqlx::query_as::<_, (i64, i64, i64, i64)>(
                r#"
                SELECT
                    COUNT(*),
                    COUNT(*) FILTER (WHERE status = 'pending'),
                    COUNT(*) FILTER (WHERE status = 'accepted'),
                    COUNT(*) FILTER (WHERE status = 'rejected')
                FROM requests
                "#,
            )
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get request counts: {:?}", e);
                AppError::Database(e)
            })?;

        let (lost_pets, found_pets, adopted_pets, adoptable_pets) =
            sqlx::query_as::<_, (i64, i64, i64, i64)>(
                r#"
                SELECT
                    COUNT(*) FILTER (WHERE status = 'lost'),
                    COUNT(*) FILTER (WHERE status = 'found'),
                    COUNT(*) FILTER (WHERE status = 'adopted'),
                    COUNT(*) FILTER (WHERE status = 'adoptable')
                FROM pets
                "#,
            )
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get pet counts: {:?}", e);
                AppError::Database(e)
            })?;

        let unread_notifications = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE is_read = FALSE",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get unread count: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(AdminSummaryDto {
            total_requests,
            pending_requests,
            accepted_requests,
            rejected_requests,
            lost_pets,
            found_pets,
            adopted_pets,
            adoptable_pets,
            unread_notifications,
        })
    }
}
