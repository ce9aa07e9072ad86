mod moderation_service;
mod request_service;

pub use moderation_service::ModerationService;
pub use request_service::RequestService;
