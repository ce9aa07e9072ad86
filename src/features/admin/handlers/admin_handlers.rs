use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::admin::dtos::{AdminRequestDto, AdminSummaryDto, RequestQueueQuery};
use crate::features::admin::services::AdminService;
use crate::features::auth::guards::RequireAdmin;
use crate::features::requests::dtos::{RequestResponseDto, UpdateRequestStatusDto};
use crate::features::requests::models::RequestStatus;
use crate::features::requests::services::ModerationService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// State for admin handlers
#[derive(Clone)]
pub struct AdminState {
    pub admin_service: Arc<AdminService>,
    pub moderation_service: Arc<ModerationService>,
}

/// List the moderation queue (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/requests",
    params(RequestQueueQuery, PaginationQuery),
    responses(
        (status = 200, description = "Requests with pet and reporter", body = ApiResponse<Vec<AdminRequestDto>>),
        (status = 400, description = "Unknown status filter"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn list_requests(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AdminState>,
    Query(queue): Query<RequestQueueQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<AdminRequestDto>>>> {
    let status = queue
        .status
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(RequestStatus::from_str)
        .transpose()
        .map_err(AppError::Validation)?;

    let (rows, total) = state.admin_service.list_requests(status, &pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(rows),
        None,
        Some(Meta { total }),
    )))
}

/// Get one request with pet and reporter (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/requests/{id}",
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Request found", body = ApiResponse<AdminRequestDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn get_request(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AdminState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<AdminRequestDto>>> {
    let row = state.admin_service.get_request(id).await?;
    Ok(Json(ApiResponse::success(Some(row), None, None)))
}

/// Apply a moderation decision (admin only)
///
/// The status value is parsed case-insensitively; re-posting the current
/// status is a no-op.
#[utoipa::path(
    patch,
    path = "/api/admin/requests/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    request_body = UpdateRequestStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<RequestResponseDto>),
        (status = 400, description = "Unknown status or illegal transition"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn update_request_status(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AdminState>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<UpdateRequestStatusDto>,
) -> Result<Json<ApiResponse<RequestResponseDto>>> {
    let target = RequestStatus::from_str(&dto.status).map_err(AppError::Validation)?;

    let request = state
        .moderation_service
        .update_status(&user, id, target)
        .await?;
    Ok(Json(ApiResponse::success(
        Some(request.into()),
        Some(format!("Request marked {}", target)),
        None,
    )))
}

/// Dashboard summary counts (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/summary",
    responses(
        (status = 200, description = "Summary counts", body = ApiResponse<AdminSummaryDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn get_summary(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AdminState>,
) -> Result<Json<ApiResponse<AdminSummaryDto>>> {
    let summary = state.admin_service.summary().await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}
