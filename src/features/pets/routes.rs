use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::pets::handlers::{self, PetState};
use crate::features::pets::services::{PetService, SearchService};
use crate::modules::storage::MediaStore;

/// Routes that require authentication (report submission)
pub fn protected_routes(
    pet_service: Arc<PetService>,
    search_service: Arc<SearchService>,
    media_store: Arc<MediaStore>,
) -> Router {
    let state = PetState {
        pet_service,
        search_service,
        media_store,
    };

    Router::new()
        .route("/api/pets/report-lost", post(handlers::report_lost_pet))
        .route("/api/pets/report-found", post(handlers::report_found_pet))
        .with_state(state)
}

/// Public routes (listing, detail, search)
pub fn public_routes(
    pet_service: Arc<PetService>,
    search_service: Arc<SearchService>,
    media_store: Arc<MediaStore>,
) -> Router {
    let state = PetState {
        pet_service,
        search_service,
        media_store,
    };

    Router::new()
        .route("/api/pets", get(handlers::list_pets))
        .route("/api/pets/find", get(handlers::find_pets))
        .route("/api/pets/{id}", get(handlers::get_pet))
        .with_state(state)
}
