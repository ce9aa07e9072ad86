use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::auth::guards::RequireAdmin;
use crate::features::notifications::dtos::{
    MarkAllReadResponseDto, NotificationResponseDto, UnreadCountDto,
};
use crate::features::notifications::services::NotificationService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List notifications (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/notifications",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Notifications, newest first", body = ApiResponse<Vec<NotificationResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "notifications"
)]
pub async fn list_notifications(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<NotificationService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<NotificationResponseDto>>>> {
    let (notifications, total) = service.list(&pagination).await?;
    let dtos: Vec<NotificationResponseDto> =
        notifications.into_iter().map(|n| n.into()).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Get the unread notification count (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/notifications/unread-count",
    responses(
        (status = 200, description = "Unread count", body = ApiResponse<UnreadCountDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "notifications"
)]
pub async fn unread_count(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<NotificationService>>,
) -> Result<Json<ApiResponse<UnreadCountDto>>> {
    let unread = service.unread_count().await?;
    Ok(Json(ApiResponse::success(
        Some(UnreadCountDto { unread }),
        None,
        None,
    )))
}

/// Mark one notification read (admin only, idempotent)
#[utoipa::path(
    post,
    path = "/api/admin/notifications/{id}/mark-read",
    params(
        ("id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked read", body = ApiResponse<NotificationResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Notification not found")
    ),
    security(("bearer_auth" = [])),
    tag = "notifications"
)]
pub async fn mark_read(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<NotificationService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<NotificationResponseDto>>> {
    let notification = service.mark_read(id).await?;
    Ok(Json(ApiResponse::success(
        Some(notification.into()),
        None,
        None,
    )))
}

/// Mark all notifications read (admin only, idempotent)
#[utoipa::path(
    post,
    path = "/api/admin/notifications/mark-all-read",
    responses(
        (status = 200, description = "All notifications marked read", body = ApiResponse<MarkAllReadResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "notifications"
)]
pub async fn mark_all_read(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<NotificationService>>,
) -> Result<Json<ApiResponse<MarkAllReadResponseDto>>> {
    let marked = service.mark_all_read().await?;
    Ok(Json(ApiResponse::success(
        Some(MarkAllReadResponseDto { marked }),
        None,
        None,
    )))
}
