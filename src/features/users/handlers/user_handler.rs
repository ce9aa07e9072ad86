use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::users::dtos::{
    EmailAvailabilityDto, ProfileResponseDto, RegisterUserDto, UpdateProfileDto, UserResponseDto,
    ValidateEmailQuery,
};
use crate::features::users::services::UserService;
use crate::shared::types::ApiResponse;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users/register",
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username or email already registered")
    ),
    tag = "users"
)]
pub async fn register(
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<RegisterUserDto>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = service.register(dto).await?;
    let username = user.username.clone();
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(user.into()),
            Some(format!("Account created for {}", username)),
            None,
        )),
    ))
}

/// Check whether an email address is already registered
#[utoipa::path(
    get,
    path = "/api/users/validate-email",
    params(ValidateEmailQuery),
    responses(
        (status = 200, description = "Availability", body = ApiResponse<EmailAvailabilityDto>)
    ),
    tag = "users"
)]
pub async fn validate_email(
    State(service): State<Arc<UserService>>,
    Query(query): Query<ValidateEmailQuery>,
) -> Result<Json<ApiResponse<EmailAvailabilityDto>>> {
    let is_taken = service.email_taken(&query.email).await?;
    Ok(Json(ApiResponse::success(
        Some(EmailAvailabilityDto { is_taken }),
        None,
        None,
    )))
}

/// Get the caller's profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Profile", body = ApiResponse<ProfileResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn get_me(
    user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    let (record, profile) = service.get_with_profile(user.sub).await?;
    Ok(Json(ApiResponse::success(
        Some(ProfileResponseDto::from_parts(record, profile)),
        None,
        None,
    )))
}

/// Update the caller's profile
#[utoipa::path(
    put,
    path = "/api/users/me",
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<ProfileResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn update_me(
    user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<UpdateProfileDto>,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (record, profile) = service.update_profile(user.sub, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(ProfileResponseDto::from_parts(record, profile)),
        Some("Profile updated".to_string()),
        None,
    )))
}
