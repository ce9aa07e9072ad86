use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::pets::models::{Pet, PetStatus, PetType};
use crate::features::requests::dtos::RequestResponseDto;
use crate::shared::constants::{
    ALLOWED_IMAGE_EXTENSIONS, ALLOWED_IMAGE_MIME_TYPES, MAX_IMAGE_SIZE,
};
use crate::shared::validation::PHONE_REGEX;

/// Response DTO for a pet
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PetResponseDto {
    pub id: Uuid,
    pub owner_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub pet_type: PetType,
    pub breed: String,
    pub color: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: PetStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Pet> for PetResponseDto {
    fn from(p: Pet) -> Self {
        Self {
            id: p.id,
            owner_id: p.owner_id,
            name: p.name,
            pet_type: p.pet_type,
            breed: p.breed,
            color: p.color,
            location: p.location,
            description: p.description,
            event_date: p.event_date,
            image_url: p.image_url,
            status: p.status,
            created_at: p.created_at,
        }
    }
}

/// Response DTO for a freshly submitted report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportCreatedDto {
    pub pet: PetResponseDto,
    pub request: RequestResponseDto,
}

/// Response DTO for a pet with its moderation request, if any
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PetDetailDto {
    #[serde(flatten)]
    pub pet: PetResponseDto,
    pub request: Option<RequestResponseDto>,
}

/// Validated payload of a lost-pet report (parsed from multipart form data)
#[derive(Debug, Clone, Validate, ToSchema)]
pub struct ReportLostPetDto {
    #[validate(length(min = 1, max = 100, message = "Pet name must be 1-100 characters"))]
    pub pet_name: String,

    pub pet_type: PetType,

    #[validate(length(min = 1, max = 100, message = "Breed must be 1-100 characters"))]
    pub breed: String,

    #[validate(length(min = 1, max = 50, message = "Color must be 1-50 characters"))]
    pub color: String,

    #[validate(length(min = 1, max = 100, message = "Location must be 1-100 characters"))]
    pub last_seen_location: String,

    /// Day the pet went missing; must not lie in the future
    pub date_lost: NaiveDate,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone_number: String,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 5000, message = "Message must not exceed 5000 characters"))]
    pub message: Option<String>,
}

/// Validated payload of a found-pet report (parsed from multipart form data)
#[derive(Debug, Clone, Validate, ToSchema)]
pub struct ReportFoundPetDto {
    #[validate(length(min = 1, max = 100, message = "Pet name must be 1-100 characters"))]
    pub pet_name: Option<String>,

    pub pet_type: PetType,

    #[validate(length(min = 1, max = 100, message = "Breed must be 1-100 characters"))]
    pub breed: String,

    #[validate(length(min = 1, max = 50, message = "Color must be 1-50 characters"))]
    pub color: String,

    #[validate(length(min = 1, max = 100, message = "Location must be 1-100 characters"))]
    pub found_location: String,

    /// Day the pet was found; must not lie in the future
    pub date_found: Option<NaiveDate>,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone_number: Option<String>,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 5000, message = "Message must not exceed 5000 characters"))]
    pub message: Option<String>,
}

/// An uploaded pet image that passed format and size checks
#[derive(Debug, Clone)]
pub struct ValidatedImage {
    /// Normalized filename extension ("jpg", "jpeg" or "png")
    pub extension: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Check an uploaded image against the format and size rules:
/// JPEG/PNG only, at most 5MB.
pub fn validate_image(
    filename: &str,
    content_type: &str,
    data: Vec<u8>,
) -> Result<ValidatedImage> {
    if !ALLOWED_IMAGE_MIME_TYPES.contains(&content_type) {
        return Err(AppError::Validation(format!(
            "Unsupported image type '{}': only JPEG and PNG are accepted",
            content_type
        )));
    }

    let extension = filename
        .rsplit('.')
        .next()
        .map(|e| e.to_lowercase())
        .filter(|e| ALLOWED_IMAGE_EXTENSIONS.contains(&e.as_str()))
        .ok_or_else(|| {
            AppError::Validation(format!(
                "Unsupported image filename '{}': extension must be jpg, jpeg or png",
                filename
            ))
        })?;

    if data.len() > MAX_IMAGE_SIZE {
        return Err(AppError::Validation(format!(
            "Image too large: {} bytes exceeds the {} byte limit",
            data.len(),
            MAX_IMAGE_SIZE
        )));
    }

    Ok(ValidatedImage {
        extension,
        content_type: content_type.to_string(),
        data,
    })
}

/// Reject report dates lying in the future.
pub fn validate_not_future(date: NaiveDate, field: &str) -> Result<()> {
    let today = Utc::now().date_naive();
    if date > today {
        return Err(AppError::Validation(format!(
            "{} must not be in the future",
            field
        )));
    }
    Ok(())
}

/// Query parameters for the find-pets search.
///
/// Values are parsed leniently: anything unreadable counts as "not
/// provided" rather than an error.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct FindPetsQuery {
    /// Pet type filter (dog, cat, bird, rabbit, other)
    pub pet_type: Option<String>,
    /// Breed substring, case-insensitive
    pub breed: Option<String>,
    /// Color term, expanded through the synonym table
    pub color: Option<String>,
    /// Location substring, case-insensitive
    pub location: Option<String>,
    /// Inclusive lower bound on the report date (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// Inclusive upper bound on the report date (YYYY-MM-DD)
    pub end_date: Option<String>,
}

/// Normalized search filters after lenient parsing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetSearchFilters {
    pub pet_type: Option<PetType>,
    pub breed: Option<String>,
    pub color: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl PetSearchFilters {
    pub fn is_empty(&self) -> bool {
        self.pet_type.is_none()
            && self.breed.is_none()
            && self.color.is_none()
            && self.location.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl FindPetsQuery {
    /// Fail-closed normalization: blank or unparseable values become None.
    pub fn normalize(self) -> PetSearchFilters {
        PetSearchFilters {
            pet_type: non_blank(self.pet_type).and_then(|s| PetType::from_str(&s).ok()),
            breed: non_blank(self.breed),
            color: non_blank(self.color),
            location: non_blank(self.location),
            start_date: non_blank(self.start_date)
                .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
            end_date: non_blank(self.end_date)
                .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_image_accepts_jpeg() {
        let img = validate_image("rex.JPG", "image/jpeg", vec![0u8; 1024]).unwrap();
        assert_eq!(img.extension, "jpg");
    }

    #[test]
    fn test_validate_image_rejects_gif() {
        assert!(matches!(
            validate_image("rex.gif", "image/gif", vec![0u8; 16]),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_image_rejects_mismatched_extension() {
        assert!(matches!(
            validate_image("rex.webp", "image/png", vec![0u8; 16]),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_image_rejects_oversize() {
        assert!(matches!(
            validate_image("rex.png", "image/png", vec![0u8; MAX_IMAGE_SIZE + 1]),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_not_future() {
        let today = Utc::now().date_naive();
        assert!(validate_not_future(today, "date_lost").is_ok());
        assert!(validate_not_future(today.pred_opt().unwrap(), "date_lost").is_ok());
        assert!(validate_not_future(today.succ_opt().unwrap(), "date_lost").is_err());
    }

    #[test]
    fn test_normalize_treats_garbage_as_absent() {
        let filters = FindPetsQuery {
            pet_type: Some("dragon".to_string()),
            breed: Some("  ".to_string()),
            color: Some("Golden".to_string()),
            location: None,
            start_date: Some("not-a-date".to_string()),
            end_date: Some("2025-03-01".to_string()),
        }
        .normalize();

        assert_eq!(filters.pet_type, None);
        assert_eq!(filters.breed, None);
        assert_eq!(filters.color, Some("Golden".to_string()));
        assert_eq!(filters.start_date, None);
        assert_eq!(
            filters.end_date,
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
    }

    #[test]
    fn test_normalize_empty_query() {
        assert!(FindPetsQuery::default().normalize().is_empty());
    }
}
