use std::collections::HashMap;
use std::sync::Arc;

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::activity::models::{ActivityLog, ActivityType};
use crate::features::activity::services::ActivityService;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::pets::models::Pet;
use crate::features::requests::dtos::UpdateRequestDto;
use crate::features::requests::models::{Request, RequestStatus};

const REQUEST_COLUMNS: &str = "id, user_id, pet_id, request_type, phone_number, message, status, \
                               reviewed_by, reviewed_at, created_at, updated_at";

const PET_COLUMNS: &str = "id, owner_id, name, pet_type, breed, color, location, description, \
                           event_date, image_url, status, created_at";

/// Service for a user's own reports.
///
/// Every mutation is gated twice: the caller must own the request and the
/// request must still be pending.
pub struct RequestService {
    pool: PgPool,
    activity_service: Arc<ActivityService>,
}

impl RequestService {
    pub fn new(pool: PgPool, activity_service: Arc<ActivityService>) -> Self {
        Self {
            pool,
            activity_service,
        }
    }

    /// The caller's requests with their pets, newest first.
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<(Request, Pet)>> {
        let requests = sqlx::query_as::<_, Request>(&format!(
            r#"
            SELECT {REQUEST_COLUMNS} FROM requests
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list requests for user {}: {:?}", user_id, e);
            AppError::Database(e)
        })?;

        let pet_ids: Vec<Uuid> = requests.iter().map(|r| r.pet_id).collect();
        let pets = sqlx::query_as::<_, Pet>(&format!(
            "SELECT {PET_COLUMNS} FROM pets WHERE id = ANY($1)"
        ))
        .bind(&pet_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load pets for requests: {:?}", e);
            AppError::Database(e)
        })?;

        let mut by_id: HashMap<Uuid, Pet> = pets.into_iter().map(|p| (p.id, p)).collect();

        Ok(requests
            .into_iter()
            .filter_map(|r| by_id.remove(&r.pet_id).map(|p| (r, p)))
            .collect())
    }

    /// Request detail with its pet; visible to the owner and admins.
    pub async fn get_for_user(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<(Request, Pet)> {
        let request = Self::fetch(&self.pool, id).await?;

        if request.user_id != user.sub && !user.is_admin() {
            // Hide other users' reports rather than acknowledging them
            return Err(AppError::NotFound(format!("Request {} not found", id)));
        }

        let pet = sqlx::query_as::<_, Pet>(&format!(
            "SELECT {PET_COLUMNS} FROM pets WHERE id = $1"
        ))
        .bind(request.pet_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load pet {}: {:?}", request.pet_id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Pet for request {} not found", id)))?;

        Ok((request, pet))
    }

    /// Edit an own, still-pending report. Pet and request fields are
    /// patched together with an `edited` activity entry in one
    /// transaction.
    pub async fn update_request(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        dto: UpdateRequestDto,
    ) -> Result<(Request, Pet)> {
        let changed = dto.changed_fields();

        let mut tx = self.pool.begin().await?;

        let request = Self::fetch_for_update(&mut tx, id).await?;
        Self::check_owned_pending(&request, user, "edited")?;

        let pet = sqlx::query_as::<_, Pet>(&format!(
            r#"
            UPDATE pets
            SET name = COALESCE($2, name),
                breed = COALESCE($3, breed),
                color = COALESCE($4, color),
                location = COALESCE($5, location),
                description = COALESCE($6, description)
            WHERE id = $1
            RETURNING {PET_COLUMNS}
            "#
        ))
        .bind(request.pet_id)
        .bind(dto.pet_name.as_deref())
        .bind(dto.breed.as_deref())
        .bind(dto.color.as_deref())
        .bind(dto.location.as_deref())
        .bind(dto.description.as_deref())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update pet {}: {:?}", request.pet_id, e);
            AppError::Database(e)
        })?;

        let request = sqlx::query_as::<_, Request>(&format!(
            r#"
            UPDATE requests
            SET phone_number = COALESCE($2, phone_number),
                message = COALESCE($3, message),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {REQUEST_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(dto.phone_number.as_deref())
        .bind(dto.message.as_deref())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update request {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        ActivityService::record(
            &mut tx,
            request.pet_id,
            ActivityType::Edited,
            &user.actor_tag(),
            &format!("Report edited; fields: {}", changed.join(", ")),
        )
        .await?;

        tx.commit().await?;

        tracing::info!("Request {} edited by {}", id, user.username);

        Ok((request, pet))
    }

    /// Withdraw an own, still-pending report. The `deleted` activity entry
    /// is written first; deleting the pet cascades to the request and
    /// detaches the trail (`pet_id` goes NULL).
    pub async fn delete_request(&self, user: &AuthenticatedUser, id: Uuid) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let request = Self::fetch_for_update(&mut tx, id).await?;
        Self::check_owned_pending(&request, user, "deleted")?;

        ActivityService::record(
            &mut tx,
            request.pet_id,
            ActivityType::Deleted,
            &user.actor_tag(),
            &format!("{} report withdrawn by reporter", request.request_type),
        )
        .await?;

        sqlx::query("DELETE FROM pets WHERE id = $1")
            .bind(request.pet_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete pet {}: {:?}", request.pet_id, e);
                AppError::Database(e)
            })?;

        tx.commit().await?;

        tracing::info!("Request {} deleted by {}", id, user.username);

        Ok(())
    }

    /// Activity trail for a request's pet, newest first.
    pub async fn history(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        limit: Option<i64>,
    ) -> Result<Vec<ActivityLog>> {
        let (request, _pet) = self.get_for_user(user, id).await?;
        self.activity_service
            .list_for_pet(request.pet_id, limit)
            .await
    }

    async fn fetch(pool: &PgPool, id: Uuid) -> Result<Request> {
        sqlx::query_as::<_, Request>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM requests WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get request {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    async fn fetch_for_update(conn: &mut PgConnection, id: Uuid) -> Result<Request> {
        sqlx::query_as::<_, Request>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM requests WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to lock request {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// The two gates every user mutation passes: ownership, then the
    /// pending status.
    fn check_owned_pending(
        request: &Request,
        user: &AuthenticatedUser,
        action: &str,
    ) -> Result<()> {
        if request.user_id != user.sub {
            return Err(AppError::Forbidden(format!(
                "Only the reporter may modify this report (attempted: {})",
                action
            )));
        }
        if request.status != RequestStatus::Pending {
            return Err(AppError::Forbidden(format!(
                "Only pending reports can be {}; this one is {}",
                action, request.status
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::features::requests::models::RequestType;

    fn request_with(user_id: Uuid, status: RequestStatus) -> Request {
        Request {
            id: Uuid::new_v4(),
            user_id,
            pet_id: Uuid::new_v4(),
            request_type: RequestType::Lost,
            phone_number: Some("08123456789".to_string()),
            message: None,
            status,
            reviewed_by: None,
            reviewed_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn owner() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: Uuid::new_v4(),
            username: "maya".to_string(),
            roles: vec!["user".to_string()],
        }
    }

    #[test]
    fn test_pending_owned_request_passes() {
        let user = owner();
        let request = request_with(user.sub, RequestStatus::Pending);
        assert!(RequestService::check_owned_pending(&request, &user, "edited").is_ok());
    }

    #[test]
    fn test_foreign_request_is_forbidden() {
        let user = owner();
        let request = request_with(Uuid::new_v4(), RequestStatus::Pending);
        assert!(matches!(
            RequestService::check_owned_pending(&request, &user, "edited"),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_decided_request_is_forbidden() {
        let user = owner();
        for status in [RequestStatus::Accepted, RequestStatus::Rejected] {
            let request = request_with(user.sub, status);
            assert!(matches!(
                RequestService::check_owned_pending(&request, &user, "deleted"),
                Err(AppError::Forbidden(_))
            ));
        }
    }
}
