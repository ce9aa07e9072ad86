use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, MaybeUser};
use crate::features::auth::guards::RequireAdmin;
use crate::features::contact::dtos::{ContactResponseDto, CreateContactDto};
use crate::features::contact::services::ContactService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Submit a contact message or issue report
///
/// Public endpoint; an authenticated caller is linked to the submission.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Submission received", body = ApiResponse<ContactResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Referenced pet not found")
    ),
    tag = "contact"
)]
pub async fn create_submission(
    MaybeUser(user): MaybeUser,
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<CreateContactDto>,
) -> Result<(StatusCode, Json<ApiResponse<ContactResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let submission = service.create(dto, user.map(|u| u.sub)).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(submission.into()),
            Some("Thank you for your message".to_string()),
            None,
        )),
    ))
}

/// List contact submissions (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/contact-submissions",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Submissions, newest first", body = ApiResponse<Vec<ContactResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "contact"
)]
pub async fn list_submissions(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ContactService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ContactResponseDto>>>> {
    let (submissions, total) = service.list(&pagination).await?;
    let dtos: Vec<ContactResponseDto> = submissions.into_iter().map(|s| s.into()).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}
