use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::pets::dtos::PetResponseDto;
use crate::features::requests::models::{Request, RequestStatus, RequestType};
use crate::shared::validation::PHONE_REGEX;

/// Response DTO for a moderation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RequestResponseDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub pet_id: Uuid,
    pub request_type: RequestType,
    pub phone_number: Option<String>,
    pub message: Option<String>,
    pub status: RequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Request> for RequestResponseDto {
    fn from(r: Request) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            pet_id: r.pet_id,
            request_type: r.request_type,
            phone_number: r.phone_number,
            message: r.message,
            status: r.status,
            reviewed_by: r.reviewed_by,
            reviewed_at: r.reviewed_at,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Response DTO for a request together with its pet
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RequestWithPetDto {
    #[serde(flatten)]
    pub request: RequestResponseDto,
    pub pet: PetResponseDto,
}

/// Request DTO for editing an own, still-pending report.
///
/// Pet fields and request fields are all optional; absent fields stay
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRequestDto {
    #[validate(length(min = 1, max = 100, message = "Pet name must be 1-100 characters"))]
    pub pet_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Breed must be 1-100 characters"))]
    pub breed: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Color must be 1-50 characters"))]
    pub color: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Location must be 1-100 characters"))]
    pub location: Option<String>,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone_number: Option<String>,

    #[validate(length(max = 5000, message = "Message must not exceed 5000 characters"))]
    pub message: Option<String>,
}

impl UpdateRequestDto {
    /// Names of the fields carrying a value, for the audit trail.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.pet_name.is_some() {
            fields.push("pet_name");
        }
        if self.breed.is_some() {
            fields.push("breed");
        }
        if self.color.is_some() {
            fields.push("color");
        }
        if self.location.is_some() {
            fields.push("location");
        }
        if self.description.is_some() {
            fields.push("description");
        }
        if self.phone_number.is_some() {
            fields.push("phone_number");
        }
        if self.message.is_some() {
            fields.push("message");
        }
        fields
    }
}

/// Request DTO for the admin status transition.
///
/// The status value is parsed case-insensitively ("Accepted" and
/// "accepted" both work).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRequestStatusDto {
    #[schema(example = "accepted")]
    pub status: String,
}

/// Query parameters for the report history endpoint
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct HistoryQuery {
    /// Latest-N slice; absent returns the full trail (clamped)
    #[param(minimum = 1, maximum = 100)]
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changed_fields_lists_only_present() {
        let dto = UpdateRequestDto {
            pet_name: None,
            breed: Some("Labrador".to_string()),
            color: None,
            location: Some("Central Park".to_string()),
            description: None,
            phone_number: None,
            message: None,
        };
        assert_eq!(dto.changed_fields(), vec!["breed", "location"]);
    }
}
