use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Public routes (registration, email availability)
pub fn public_routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users/register", post(handlers::register))
        .route("/api/users/validate-email", get(handlers::validate_email))
        .with_state(service)
}

/// Protected routes (own profile)
pub fn protected_routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users/me", get(handlers::get_me))
        .route("/api/users/me", put(handlers::update_me))
        .with_state(service)
}
