use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::activity::dtos::ActivityResponseDto;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::requests::dtos::{
    HistoryQuery, RequestWithPetDto, UpdateRequestDto,
};
use crate::features::requests::services::RequestService;
use crate::shared::types::ApiResponse;

/// List the caller's reports
#[utoipa::path(
    get,
    path = "/api/requests",
    responses(
        (status = 200, description = "The caller's reports, newest first", body = ApiResponse<Vec<RequestWithPetDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "requests"
)]
pub async fn list_requests(
    user: AuthenticatedUser,
    State(service): State<Arc<RequestService>>,
) -> Result<Json<ApiResponse<Vec<RequestWithPetDto>>>> {
    let rows = service.list_by_user(user.sub).await?;
    let dtos: Vec<RequestWithPetDto> = rows
        .into_iter()
        .map(|(request, pet)| RequestWithPetDto {
            request: request.into(),
            pet: pet.into(),
        })
        .collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Get one report (owner or admin)
#[utoipa::path(
    get,
    path = "/api/requests/{id}",
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Request found", body = ApiResponse<RequestWithPetDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "requests"
)]
pub async fn get_request(
    user: AuthenticatedUser,
    State(service): State<Arc<RequestService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<RequestWithPetDto>>> {
    let (request, pet) = service.get_for_user(&user, id).await?;
    let dto = RequestWithPetDto {
        request: request.into(),
        pet: pet.into(),
    };
    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

/// Edit an own, still-pending report
#[utoipa::path(
    put,
    path = "/api/requests/{id}",
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    request_body = UpdateRequestDto,
    responses(
        (status = 200, description = "Report updated", body = ApiResponse<RequestWithPetDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owner, or no longer pending"),
        (status = 404, description = "Request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "requests"
)]
pub async fn update_request(
    user: AuthenticatedUser,
    State(service): State<Arc<RequestService>>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<UpdateRequestDto>,
) -> Result<Json<ApiResponse<RequestWithPetDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (request, pet) = service.update_request(&user, id, dto).await?;
    let dto = RequestWithPetDto {
        request: request.into(),
        pet: pet.into(),
    };
    Ok(Json(ApiResponse::success(
        Some(dto),
        Some("Report updated".to_string()),
        None,
    )))
}

/// Withdraw an own, still-pending report
#[utoipa::path(
    delete,
    path = "/api/requests/{id}",
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Report withdrawn"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owner, or no longer pending"),
        (status = 404, description = "Request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "requests"
)]
pub async fn delete_request(
    user: AuthenticatedUser,
    State(service): State<Arc<RequestService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_request(&user, id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Report withdrawn".to_string()),
        None,
    )))
}

/// Activity history of a report (owner or admin)
#[utoipa::path(
    get,
    path = "/api/requests/{id}/history",
    params(
        ("id" = Uuid, Path, description = "Request ID"),
        HistoryQuery
    ),
    responses(
        (status = 200, description = "Activity entries, newest first", body = ApiResponse<Vec<ActivityResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "requests"
)]
pub async fn get_history(
    user: AuthenticatedUser,
    State(service): State<Arc<RequestService>>,
    Path(id): Path<uuid::Uuid>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<ApiResponse<Vec<ActivityResponseDto>>>> {
    let entries = service.history(&user, id, query.limit).await?;
    let dtos: Vec<ActivityResponseDto> = entries.into_iter().map(|e| e.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}
