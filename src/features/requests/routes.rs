use std::sync::Arc;

use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::features::requests::handlers;
use crate::features::requests::services::RequestService;

/// Create routes for a user's own reports (auth required)
pub fn routes(service: Arc<RequestService>) -> Router {
    Router::new()
        .route("/api/requests", get(handlers::list_requests))
        .route("/api/requests/{id}", get(handlers::get_request))
        .route("/api/requests/{id}", put(handlers::update_request))
        .route("/api/requests/{id}", delete(handlers::delete_request))
        .route("/api/requests/{id}/history", get(handlers::get_history))
        .with_state(service)
}
