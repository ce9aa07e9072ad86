use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use tracing::debug;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::pets::dtos::{
    validate_image, validate_not_future, FindPetsQuery, PetDetailDto, PetResponseDto,
    ReportCreatedDto, ReportFoundPetDto, ReportLostPetDto, ValidatedImage,
};
use crate::features::pets::models::PetType;
use crate::features::pets::services::{PetService, SearchService};
use crate::modules::storage::MediaStore;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// State for pet handlers
#[derive(Clone)]
pub struct PetState {
    pub pet_service: Arc<PetService>,
    pub search_service: Arc<SearchService>,
    pub media_store: Arc<MediaStore>,
}

/// Text fields and the optional image collected from a report form
struct ReportForm {
    fields: HashMap<String, String>,
    image: Option<ValidatedImage>,
}

impl ReportForm {
    /// Drain a multipart stream. The image part is validated on the spot;
    /// unknown fields are ignored.
    async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut fields = HashMap::new();
        let mut image = None;

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            debug!("Failed to read multipart field: {}", e);
            AppError::BadRequest(format!("Failed to read multipart data: {}", e))
        })? {
            let field_name = field.name().unwrap_or("").to_string();

            if field_name == "image" {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let filename = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read image bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read image data: {}", e))
                })?;

                // An empty file part means no image was attached
                if data.is_empty() {
                    continue;
                }

                image = Some(validate_image(&filename, &content_type, data.to_vec())?);
            } else {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read field '{}': {}", field_name, e))
                })?;
                if !text.trim().is_empty() {
                    fields.insert(field_name, text);
                }
            }
        }

        Ok(Self { fields, image })
    }

    fn take(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    fn require(&mut self, name: &str) -> Result<String> {
        self.take(name)
            .ok_or_else(|| AppError::Validation(format!("Field '{}' is required", name)))
    }

    fn require_pet_type(&mut self) -> Result<PetType> {
        let raw = self.require("pet_type")?;
        PetType::from_str(&raw).map_err(AppError::Validation)
    }

    fn parse_date(&mut self, name: &str) -> Result<Option<NaiveDate>> {
        match self.take(name) {
            None => Ok(None),
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map(Some)
                .map_err(|_| {
                    AppError::Validation(format!("Field '{}' must be a YYYY-MM-DD date", name))
                }),
        }
    }

    fn require_date(&mut self, name: &str) -> Result<NaiveDate> {
        self.parse_date(name)?
            .ok_or_else(|| AppError::Validation(format!("Field '{}' is required", name)))
    }
}

/// Store a validated image and return its public URL.
async fn store_image(store: &MediaStore, image: ValidatedImage) -> Result<String> {
    let key = store.generate_key(&image.extension);
    store.save(&key, image.data).await?;
    Ok(store.public_url(&key))
}

/// Report a lost pet
///
/// Accepts multipart/form-data with the report fields and an optional
/// `image` part (JPEG/PNG, at most 5MB).
#[utoipa::path(
    post,
    path = "/api/pets/report-lost",
    request_body(
        content = ReportLostPetDto,
        content_type = "multipart/form-data",
        description = "Lost pet report form with optional image part",
    ),
    responses(
        (status = 201, description = "Report submitted", body = ApiResponse<ReportCreatedDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "pets"
)]
pub async fn report_lost_pet(
    user: AuthenticatedUser,
    State(state): State<PetState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<ReportCreatedDto>>)> {
    let mut form = ReportForm::from_multipart(multipart).await?;

    let dto = ReportLostPetDto {
        pet_name: form.require("pet_name")?,
        pet_type: form.require_pet_type()?,
        breed: form.require("breed")?,
        color: form.require("color")?,
        last_seen_location: form.require("last_seen_location")?,
        date_lost: form.require_date("date_lost")?,
        phone_number: form.require("phone_number")?,
        description: form.take("description"),
        message: form.take("message"),
    };
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    validate_not_future(dto.date_lost, "date_lost")?;

    let image_url = match form.image.take() {
        Some(image) => Some(store_image(&state.media_store, image).await?),
        None => None,
    };

    let (pet, request) = state
        .pet_service
        .submit_lost_report(&user, dto, image_url)
        .await?;

    let body = ReportCreatedDto {
        pet: pet.into(),
        request: request.into(),
    };
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(body),
            Some("Lost pet reported successfully".to_string()),
            None,
        )),
    ))
}

/// Report a found pet
///
/// Accepts multipart/form-data with the report fields and an optional
/// `image` part (JPEG/PNG, at most 5MB).
#[utoipa::path(
    post,
    path = "/api/pets/report-found",
    request_body(
        content = ReportFoundPetDto,
        content_type = "multipart/form-data",
        description = "Found pet report form with optional image part",
    ),
    responses(
        (status = 201, description = "Report submitted", body = ApiResponse<ReportCreatedDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "pets"
)]
pub async fn report_found_pet(
    user: AuthenticatedUser,
    State(state): State<PetState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<ReportCreatedDto>>)> {
    let mut form = ReportForm::from_multipart(multipart).await?;

    let dto = ReportFoundPetDto {
        pet_name: form.take("pet_name"),
        pet_type: form.require_pet_type()?,
        breed: form.require("breed")?,
        color: form.require("color")?,
        found_location: form.require("found_location")?,
        date_found: form.parse_date("date_found")?,
        phone_number: form.take("phone_number"),
        description: form.take("description"),
        message: form.take("message"),
    };
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    if let Some(date) = dto.date_found {
        validate_not_future(date, "date_found")?;
    }

    let image_url = match form.image.take() {
        Some(image) => Some(store_image(&state.media_store, image).await?),
        None => None,
    };

    let (pet, request) = state
        .pet_service
        .submit_found_report(&user, dto, image_url)
        .await?;

    let body = ReportCreatedDto {
        pet: pet.into(),
        request: request.into(),
    };
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(body),
            Some("Found pet reported successfully".to_string()),
            None,
        )),
    ))
}

/// Search found pets (public)
///
/// Opt-in search: without any filter the result is empty. Color terms run
/// through a fixed synonym table ("brown" also matches tan and chocolate).
#[utoipa::path(
    get,
    path = "/api/pets/find",
    params(FindPetsQuery),
    responses(
        (status = 200, description = "Matching pets", body = ApiResponse<Vec<PetResponseDto>>)
    ),
    tag = "pets"
)]
pub async fn find_pets(
    State(state): State<PetState>,
    Query(query): Query<FindPetsQuery>,
) -> Result<Json<ApiResponse<Vec<PetResponseDto>>>> {
    let filters = query.normalize();
    let pets = state.search_service.find_pets(&filters).await?;
    let dtos: Vec<PetResponseDto> = pets.into_iter().map(|p| p.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// List all available pets (public)
///
/// Union of explicitly adoptable pets and accepted found reports, newest
/// first.
#[utoipa::path(
    get,
    path = "/api/pets",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Available pets", body = ApiResponse<Vec<PetResponseDto>>)
    ),
    tag = "pets"
)]
pub async fn list_pets(
    State(state): State<PetState>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<PetResponseDto>>>> {
    let (pets, total) = state.pet_service.list_available(&pagination).await?;
    let dtos: Vec<PetResponseDto> = pets.into_iter().map(|p| p.into()).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Get pet by ID (public)
#[utoipa::path(
    get,
    path = "/api/pets/{id}",
    params(
        ("id" = Uuid, Path, description = "Pet ID")
    ),
    responses(
        (status = 200, description = "Pet found", body = ApiResponse<PetDetailDto>),
        (status = 404, description = "Pet not found")
    ),
    tag = "pets"
)]
pub async fn get_pet(
    State(state): State<PetState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<PetDetailDto>>> {
    let pet = state.pet_service.get_by_id(id).await?;
    let request = state.pet_service.get_request_for_pet(id).await?;

    let dto = PetDetailDto {
        pet: pet.into(),
        request: request.map(|r| r.into()),
    };
    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}
