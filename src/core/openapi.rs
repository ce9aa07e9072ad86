use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::activity::dtos as activity_dtos;
use crate::features::activity::models as activity_models;
use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::auth;
use crate::features::contact::{
    dtos as contact_dtos, handlers as contact_handlers, models as contact_models,
};
use crate::features::notifications::{
    dtos as notifications_dtos, handlers as notifications_handlers,
    models as notifications_models,
};
use crate::features::pets::{dtos as pets_dtos, handlers as pets_handlers, models as pets_models};
use crate::features::requests::{
    dtos as requests_dtos, handlers as requests_handlers, models as requests_models,
};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Users
        users_handlers::register,
        users_handlers::validate_email,
        users_handlers::get_me,
        users_handlers::update_me,
        // Pets
        pets_handlers::report_lost_pet,
        pets_handlers::report_found_pet,
        pets_handlers::find_pets,
        pets_handlers::list_pets,
        pets_handlers::get_pet,
        // Requests
        requests_handlers::list_requests,
        requests_handlers::get_request,
        requests_handlers::update_request,
        requests_handlers::delete_request,
        requests_handlers::get_history,
        // Contact
        contact_handlers::create_submission,
        contact_handlers::list_submissions,
        // Notifications (admin)
        notifications_handlers::list_notifications,
        notifications_handlers::unread_count,
        notifications_handlers::mark_read,
        notifications_handlers::mark_all_read,
        // Admin
        admin_handlers::list_requests,
        admin_handlers::get_request,
        admin_handlers::update_request_status,
        admin_handlers::get_summary,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::model::AuthenticatedUser,
            // Users
            users_dtos::RegisterUserDto,
            users_dtos::UserResponseDto,
            users_dtos::ProfileResponseDto,
            users_dtos::UpdateProfileDto,
            users_dtos::EmailAvailabilityDto,
            ApiResponse<users_dtos::UserResponseDto>,
            ApiResponse<users_dtos::ProfileResponseDto>,
            ApiResponse<users_dtos::EmailAvailabilityDto>,
            // Pets
            pets_models::PetType,
            pets_models::PetStatus,
            pets_dtos::PetResponseDto,
            pets_dtos::PetDetailDto,
            pets_dtos::ReportCreatedDto,
            pets_dtos::ReportLostPetDto,
            pets_dtos::ReportFoundPetDto,
            ApiResponse<Vec<pets_dtos::PetResponseDto>>,
            ApiResponse<pets_dtos::PetDetailDto>,
            ApiResponse<pets_dtos::ReportCreatedDto>,
            // Requests
            requests_models::RequestType,
            requests_models::RequestStatus,
            requests_dtos::RequestResponseDto,
            requests_dtos::RequestWithPetDto,
            requests_dtos::UpdateRequestDto,
            requests_dtos::UpdateRequestStatusDto,
            ApiResponse<Vec<requests_dtos::RequestWithPetDto>>,
            ApiResponse<requests_dtos::RequestWithPetDto>,
            ApiResponse<requests_dtos::RequestResponseDto>,
            // Activity
            activity_models::ActivityType,
            activity_dtos::ActivityResponseDto,
            ApiResponse<Vec<activity_dtos::ActivityResponseDto>>,
            // Contact
            contact_models::SubmissionType,
            contact_models::SubmissionStatus,
            contact_dtos::CreateContactDto,
            contact_dtos::ContactResponseDto,
            ApiResponse<contact_dtos::ContactResponseDto>,
            ApiResponse<Vec<contact_dtos::ContactResponseDto>>,
            // Notifications
            notifications_models::NotificationType,
            notifications_dtos::NotificationResponseDto,
            notifications_dtos::UnreadCountDto,
            notifications_dtos::MarkAllReadResponseDto,
            ApiResponse<Vec<notifications_dtos::NotificationResponseDto>>,
            ApiResponse<notifications_dtos::NotificationResponseDto>,
            ApiResponse<notifications_dtos::UnreadCountDto>,
            ApiResponse<notifications_dtos::MarkAllReadResponseDto>,
            // Admin
            admin_dtos::AdminRequestDto,
            admin_dtos::AdminSummaryDto,
            ApiResponse<Vec<admin_dtos::AdminRequestDto>>,
            ApiResponse<admin_dtos::AdminRequestDto>,
            ApiResponse<admin_dtos::AdminSummaryDto>,
        )
    ),
    tags(
        (name = "users", description = "Registration and profiles"),
        (name = "pets", description = "Pet reports, listing and search"),
        (name = "requests", description = "A user's own reports"),
        (name = "contact", description = "Contact messages and issue reports"),
        (name = "notifications", description = "Admin notifications"),
        (name = "admin", description = "Moderation queue and decisions (admin only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "PetRescue API",
        version = "0.1.0",
        description = "API documentation for PetRescue",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
