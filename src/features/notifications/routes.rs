use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::notifications::handlers;
use crate::features::notifications::services::NotificationService;

/// Create admin routes for the notifications feature.
///
/// Mounted under `/api/admin`; every handler also checks the admin guard.
pub fn admin_routes(service: Arc<NotificationService>) -> Router {
    Router::new()
        .route("/notifications", get(handlers::list_notifications))
        .route(
            "/notifications/unread-count",
            get(handlers::unread_count),
        )
        .route(
            "/notifications/{id}/mark-read",
            post(handlers::mark_read),
        )
        .route(
            "/notifications/mark-all-read",
            post(handlers::mark_all_read),
        )
        .with_state(service)
}
