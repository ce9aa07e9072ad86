use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::constants::ROLE_ADMIN;

/// Identity extracted from a validated bearer token.
///
/// Tokens are issued by the external identity provider; the claims carry
/// the user id, username and role list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// User id (`users.id`)
    pub sub: Uuid,
    pub username: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Check if user has a specific role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Check if user has admin capability (may moderate requests,
    /// read notifications, browse the moderation queue)
    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }

    /// Actor tag recorded in the activity log
    pub fn actor_tag(&self) -> String {
        if self.is_admin() {
            format!("admin:{}", self.username)
        } else {
            format!("user:{}", self.username)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: u64,
    pub iat: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_tag() {
        let user = AuthenticatedUser {
            sub: Uuid::nil(),
            username: "maya".to_string(),
            roles: vec!["user".to_string()],
        };
        assert_eq!(user.actor_tag(), "user:maya");

        let admin = AuthenticatedUser {
            sub: Uuid::nil(),
            username: "root".to_string(),
            roles: vec!["admin".to_string()],
        };
        assert!(admin.is_admin());
        assert_eq!(admin.actor_tag(), "admin:root");
    }
}
