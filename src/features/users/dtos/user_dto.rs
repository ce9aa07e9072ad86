use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::users::models::{Profile, User};
use crate::shared::validation::{PHONE_REGEX, USERNAME_REGEX};

/// Request DTO for registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterUserDto {
    #[validate(
        length(min = 3, max = 150, message = "Username must be 3-150 characters"),
        regex(
            path = *USERNAME_REGEX,
            message = "Username may contain letters, digits and underscores and must not start with a digit"
        )
    )]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(length(max = 1000, message = "Address must not exceed 1000 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 100, message = "Location must not exceed 100 characters"))]
    pub location: Option<String>,
}

/// Response DTO for a user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            phone: u.phone,
            address: u.address,
            location: u.location,
            created_at: u.created_at,
        }
    }
}

/// Response DTO for a user with profile details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponseDto {
    #[serde(flatten)]
    pub user: UserResponseDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl ProfileResponseDto {
    pub fn from_parts(user: User, profile: Profile) -> Self {
        Self {
            user: user.into(),
            bio: profile.bio,
            avatar_url: profile.avatar_url,
        }
    }
}

/// Request DTO for profile updates; absent fields stay untouched
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(length(max = 1000, message = "Address must not exceed 1000 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 100, message = "Location must not exceed 100 characters"))]
    pub location: Option<String>,

    #[validate(length(max = 5000, message = "Bio must not exceed 5000 characters"))]
    pub bio: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub avatar_url: Option<String>,
}

/// Query parameters for the email availability check
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ValidateEmailQuery {
    pub email: String,
}

/// Response DTO for the email availability check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmailAvailabilityDto {
    pub is_taken: bool,
}
