use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::admin::handlers::{self, AdminState};
use crate::features::admin::services::AdminService;
use crate::features::requests::services::ModerationService;

/// Create admin routes (mounted under `/api/admin`; every handler checks
/// the admin guard)
pub fn routes(
    admin_service: Arc<AdminService>,
    moderation_service: Arc<ModerationService>,
) -> Router {
    let state = AdminState {
        admin_service,
        moderation_service,
    };

    Router::new()
        .route("/requests", get(handlers::list_requests))
        .route("/requests/{id}", get(handlers::get_request))
        .route(
            "/requests/{id}/status",
            patch(handlers::update_request_status),
        )
        .route("/summary", get(handlers::get_summary))
        .with_state(state)
}
