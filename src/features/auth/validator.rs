use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::time::Duration;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AuthenticatedUser, Claims};

/// Validates bearer tokens issued by the external identity provider.
///
/// Tokens are HS256-signed with a shared secret; the validator only checks
/// signature and expiry (with leeway) and maps claims onto
/// [`AuthenticatedUser`].
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn new(secret: &str, leeway: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway.as_secs();
        validation.validate_exp = true;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(AuthenticatedUser {
            sub: data.claims.sub,
            username: data.claims.username,
            roles: data.claims.roles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};
    use uuid::Uuid;

    fn make_token(secret: &str, exp_offset_secs: i64) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;
        let claims = Claims {
            sub: Uuid::new_v4(),
            username: "maya".to_string(),
            roles: vec!["user".to_string()],
            exp: (now + exp_offset_secs).max(0) as u64,
            iat: now as u64,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_round_trip() {
        let validator = JwtValidator::new("secret", Duration::from_secs(0));
        let token = make_token("secret", 3600);

        let user = validator.validate_token(&token).unwrap();
        assert_eq!(user.username, "maya");
        assert!(!user.is_admin());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let validator = JwtValidator::new("secret", Duration::from_secs(0));
        let token = make_token("other-secret", 3600);

        assert!(matches!(
            validator.validate_token(&token),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let validator = JwtValidator::new("secret", Duration::from_secs(0));
        let token = make_token("secret", -3600);

        assert!(matches!(
            validator.validate_token(&token),
            Err(AppError::Unauthorized(_))
        ));
    }
}
