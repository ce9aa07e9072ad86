/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Admin role - can moderate requests and read notifications
pub const ROLE_ADMIN: &str = "admin";

/// User role - can submit and track pet reports
pub const ROLE_USER: &str = "user";

// =============================================================================
// MEDIA CONSTANTS
// =============================================================================

/// Maximum accepted pet image size (5MB)
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// MIME types accepted for pet images
pub const ALLOWED_IMAGE_MIME_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Filename extensions accepted for pet images
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
