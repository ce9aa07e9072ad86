use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::activity::models::ActivityType;
use crate::features::activity::services::ActivityService;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::notifications::models::NotificationType;
use crate::features::notifications::services::NotificationService;
use crate::features::pets::dtos::{ReportFoundPetDto, ReportLostPetDto};
use crate::features::pets::models::{Pet, PetStatus, PetType};
use crate::features::requests::models::{Request, RequestType};
use crate::shared::types::PaginationQuery;

const PET_COLUMNS: &str = "id, owner_id, name, pet_type, breed, color, location, description, \
                           event_date, image_url, status, created_at";

/// Service for pet reports: submission and public listing
pub struct PetService {
    pool: PgPool,
}

impl PetService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Submit a lost-pet report.
    ///
    /// One transaction covers the pet, its request, the `created` activity
    /// entry and the admin notification; a failure anywhere rolls the whole
    /// submission back.
    pub async fn submit_lost_report(
        &self,
        user: &AuthenticatedUser,
        dto: ReportLostPetDto,
        image_url: Option<String>,
    ) -> Result<(Pet, Request)> {
        let mut tx = self.pool.begin().await?;

        let pet = Self::insert_pet(
            &mut tx,
            user.sub,
            Some(&dto.pet_name),
            dto.pet_type,
            &dto.breed,
            &dto.color,
            &dto.last_seen_location,
            dto.description.as_deref(),
            Some(dto.date_lost),
            image_url.as_deref(),
            PetStatus::Lost,
        )
        .await?;

        let request = Self::insert_request(
            &mut tx,
            user.sub,
            pet.id,
            RequestType::Lost,
            Some(&dto.phone_number),
            dto.message.as_deref(),
        )
        .await?;

        ActivityService::record(
            &mut tx,
            pet.id,
            ActivityType::Created,
            &user.actor_tag(),
            &format!(
                "Lost pet report submitted: {} ({}) last seen at {}",
                dto.pet_name, pet.breed, pet.location
            ),
        )
        .await?;

        NotificationService::notify_request(
            &mut tx,
            NotificationType::LostReport,
            request.id,
            &report_notification_message(RequestType::Lost, &pet, &user.username),
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Lost pet report created: pet={}, request={}, reporter={}",
            pet.id,
            request.id,
            user.username
        );

        Ok((pet, request))
    }

    /// Submit a found-pet report. Same transactional unit as
    /// [`Self::submit_lost_report`].
    pub async fn submit_found_report(
        &self,
        user: &AuthenticatedUser,
        dto: ReportFoundPetDto,
        image_url: Option<String>,
    ) -> Result<(Pet, Request)> {
        let mut tx = self.pool.begin().await?;

        let pet = Self::insert_pet(
            &mut tx,
            user.sub,
            dto.pet_name.as_deref(),
            dto.pet_type,
            &dto.breed,
            &dto.color,
            &dto.found_location,
            dto.description.as_deref(),
            dto.date_found,
            image_url.as_deref(),
            PetStatus::Found,
        )
        .await?;

        let request = Self::insert_request(
            &mut tx,
            user.sub,
            pet.id,
            RequestType::Found,
            dto.phone_number.as_deref(),
            dto.message.as_deref(),
        )
        .await?;

        ActivityService::record(
            &mut tx,
            pet.id,
            ActivityType::Created,
            &user.actor_tag(),
            &format!(
                "Found pet report submitted: {} ({}) found at {}",
                pet.pet_type, pet.breed, pet.location
            ),
        )
        .await?;

        NotificationService::notify_request(
            &mut tx,
            NotificationType::FoundReport,
            request.id,
            &report_notification_message(RequestType::Found, &pet, &user.username),
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Found pet report created: pet={}, request={}, reporter={}",
            pet.id,
            request.id,
            user.username
        );

        Ok((pet, request))
    }

    #[allow(clippy::too_many_arguments)]
    async fn insert_pet(
        conn: &mut PgConnection,
        owner_id: Uuid,
        name: Option<&str>,
        pet_type: PetType,
        breed: &str,
        color: &str,
        location: &str,
        description: Option<&str>,
        event_date: Option<chrono::NaiveDate>,
        image_url: Option<&str>,
        status: PetStatus,
    ) -> Result<Pet> {
        sqlx::query_as::<_, Pet>(&format!(
            r#"
            INSERT INTO pets (owner_id, name, pet_type, breed, color, location,
                              description, event_date, image_url, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {PET_COLUMNS}
            "#
        ))
        .bind(owner_id)
        .bind(name)
        .bind(pet_type)
        .bind(breed)
        .bind(color)
        .bind(location)
        .bind(description)
        .bind(event_date)
        .bind(image_url)
        .bind(status)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert pet: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn insert_request(
        conn: &mut PgConnection,
        user_id: Uuid,
        pet_id: Uuid,
        request_type: RequestType,
        phone_number: Option<&str>,
        message: Option<&str>,
    ) -> Result<Request> {
        sqlx::query_as::<_, Request>(
            r#"
            INSERT INTO requests (user_id, pet_id, request_type, phone_number, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, pet_id, request_type, phone_number, message, status,
                      reviewed_by, reviewed_at, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(pet_id)
        .bind(request_type)
        .bind(phone_number)
        .bind(message)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert request: {:?}", e);
            AppError::Database(e)
        })
    }

    /// All available pets: explicitly adoptable ones plus accepted found
    /// reports, newest first. Returns (pets, total).
    pub async fn list_available(&self, pagination: &PaginationQuery) -> Result<(Vec<Pet>, i64)> {
        const AVAILABLE_PREDICATE: &str = r#"
            p.status = 'adoptable'
            OR (p.status = 'found'
                AND EXISTS (
                    SELECT 1 FROM requests r
                    WHERE r.pet_id = p.id
                      AND r.request_type = 'found'
                      AND r.status = 'accepted'
                ))
        "#;

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM pets p WHERE {AVAILABLE_PREDICATE}"
        ))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count available pets: {:?}", e);
            AppError::Database(e)
        })?;

        let pets = sqlx::query_as::<_, Pet>(&format!(
            r#"
            SELECT {PET_COLUMNS} FROM pets p
            WHERE {AVAILABLE_PREDICATE}
            ORDER BY p.created_at DESC
            OFFSET $1 LIMIT $2
            "#
        ))
        .bind(pagination.offset())
        .bind(pagination.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list available pets: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((pets, total))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Pet> {
        sqlx::query_as::<_, Pet>(&format!("SELECT {PET_COLUMNS} FROM pets WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get pet {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Pet {} not found", id)))
    }

    /// The moderation request attached to a pet, if any.
    pub async fn get_request_for_pet(&self, pet_id: Uuid) -> Result<Option<Request>> {
        sqlx::query_as::<_, Request>(
            r#"
            SELECT id, user_id, pet_id, request_type, phone_number, message, status,
                   reviewed_by, reviewed_at, created_at, updated_at
            FROM requests
            WHERE pet_id = $1
            "#,
        )
        .bind(pet_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get request for pet {}: {:?}", pet_id, e);
            AppError::Database(e)
        })
    }
}

/// Admin-facing message announcing a new report.
pub fn report_notification_message(
    request_type: RequestType,
    pet: &Pet,
    username: &str,
) -> String {
    match request_type {
        RequestType::Lost => format!(
            "New lost pet report: {} ({}) last seen at {}, reported by {}",
            pet.pet_type, pet.breed, pet.location, username
        ),
        RequestType::Found => format!(
            "New found pet report: {} ({}) found at {}, reported by {}",
            pet.pet_type, pet.breed, pet.location, username
        ),
        RequestType::Adoption => format!(
            "New adoption request for {} ({}) from {}",
            pet.pet_type, pet.breed, username
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_pet() -> Pet {
        Pet {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: None,
            pet_type: PetType::Dog,
            breed: "Labrador".to_string(),
            color: "Golden".to_string(),
            location: "Central Park".to_string(),
            description: None,
            event_date: None,
            image_url: None,
            status: PetStatus::Found,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_found_notification_message() {
        let msg = report_notification_message(RequestType::Found, &sample_pet(), "maya");
        assert_eq!(
            msg,
            "New found pet report: dog (Labrador) found at Central Park, reported by maya"
        );
    }

    #[test]
    fn test_lost_notification_message_names_reporter() {
        let msg = report_notification_message(RequestType::Lost, &sample_pet(), "maya");
        assert!(msg.starts_with("New lost pet report:"));
        assert!(msg.ends_with("reported by maya"));
    }
}
