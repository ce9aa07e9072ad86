use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::contact::handlers;
use crate::features::contact::services::ContactService;

/// Public routes (submission; optional-auth middleware applied by caller)
pub fn public_routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/api/contact", post(handlers::create_submission))
        .with_state(service)
}

/// Admin routes, mounted under `/api/admin`
pub fn admin_routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/contact-submissions", get(handlers::list_submissions))
        .with_state(service)
}
