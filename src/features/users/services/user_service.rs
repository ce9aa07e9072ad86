use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::{RegisterUserDto, UpdateProfileDto};
use crate::features::users::models::{Profile, User};

const USER_COLUMNS: &str = "id, username, email, phone, address, location, created_at";
const PROFILE_COLUMNS: &str = "user_id, bio, avatar_url, created_at, updated_at";

/// Service for registration and profiles
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a new user and provision the empty profile.
    ///
    /// The profile is created by an explicit hook inside the registration
    /// transaction, not by a side-effecting signal.
    pub async fn register(&self, dto: RegisterUserDto) -> Result<User> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (username, email, phone, address, location)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(dto.phone.as_deref())
        .bind(dto.address.as_deref())
        .bind(dto.location.as_deref())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Username or email already registered".to_string())
            }
            _ => {
                tracing::error!("Failed to register user: {:?}", e);
                AppError::Database(e)
            }
        })?;

        Self::create_profile(&mut tx, user.id).await?;

        tx.commit().await?;

        tracing::info!("User registered: id={}, username={}", user.id, user.username);

        Ok(user)
    }

    /// Post-registration hook: provision an empty profile row.
    async fn create_profile(conn: &mut PgConnection, user_id: Uuid) -> Result<Profile> {
        sqlx::query_as::<_, Profile>(&format!(
            r#"
            INSERT INTO profiles (user_id)
            VALUES ($1)
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(user_id)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create profile for user {}: {:?}", user_id, e);
            AppError::Database(e)
        })
    }

    /// Whether an email address is already registered (case-insensitive).
    pub async fn email_taken(&self, email: &str) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check email availability: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn get_with_profile(&self, user_id: Uuid) -> Result<(User, Profile)> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user {}: {:?}", user_id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        let profile = sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get profile for user {}: {:?}", user_id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", user_id)))?;

        Ok((user, profile))
    }

    /// Patch contact fields and profile fields together.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        dto: UpdateProfileDto,
    ) -> Result<(User, Profile)> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET phone = COALESCE($2, phone),
                address = COALESCE($3, address),
                location = COALESCE($4, location)
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(dto.phone.as_deref())
        .bind(dto.address.as_deref())
        .bind(dto.location.as_deref())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update user {}: {:?}", user_id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        let profile = sqlx::query_as::<_, Profile>(&format!(
            r#"
            UPDATE profiles
            SET bio = COALESCE($2, bio),
                avatar_url = COALESCE($3, avatar_url),
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(dto.bio.as_deref())
        .bind(dto.avatar_url.as_deref())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update profile for user {}: {:?}", user_id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", user_id)))?;

        tx.commit().await?;

        Ok((user, profile))
    }
}
