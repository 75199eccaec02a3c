//! Profile repository implementation.
//!
//! Profiles are self-owned: the only row a caller can read or update is
//! the one whose primary key equals their own identity, so every statement
//! here keys on the caller id directly. Row creation happens exclusively
//! through [`ProfileRepository::ensure_exists`], the trusted path invoked
//! on first authenticated access — there is no caller-facing insert, and
//! no delete path at all.

use sqlx::PgPool;
use uuid::Uuid;

use mealhub_core::error::{AppError, ErrorKind};
use mealhub_core::result::AppResult;
use mealhub_entity::profile::{Profile, UpdateProfile};

/// Repository for profile lookups and self-updates.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the caller's own profile.
    pub async fn find_self(&self, caller: Uuid) -> AppResult<Option<Profile>> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
            .bind(caller)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find profile", e))
    }

    /// Trusted creation path: insert a profile row for a freshly seen
    /// identity if none exists yet, then return the row.
    ///
    /// The username defaults to the provider's hint; if the hint is taken
    /// (or absent) a name derived from the user id is used instead, so
    /// first access never fails on the uniqueness constraint.
    pub async fn ensure_exists(&self, id: Uuid, username_hint: Option<&str>) -> AppResult<Profile> {
        if let Some(existing) = self.find_self(id).await? {
            return Ok(existing);
        }

        let fallback = format!("user-{}", &id.simple().to_string()[..8]);
        let username = username_hint.unwrap_or(&fallback);

        let inserted = sqlx::query_as::<_, Profile>(
            "INSERT INTO profiles (id, username) VALUES ($1, $2) \
             ON CONFLICT (id) DO NOTHING \
             RETURNING *",
        )
        .bind(id)
        .bind(username)
        .fetch_optional(&self.pool)
        .await;

        match inserted {
            Ok(Some(profile)) => Ok(profile),
            // Lost a race with a concurrent first request for the same identity.
            Ok(None) => self
                .find_self(id)
                .await?
                .ok_or_else(|| AppError::internal("Profile vanished during creation")),
            Err(sqlx::Error::Database(ref db_err))
                if db_err.constraint() == Some("profiles_username_key") =>
            {
                // Hint collided with another identity's username.
                sqlx::query_as::<_, Profile>(
                    "INSERT INTO profiles (id, username) VALUES ($1, $2) \
                     ON CONFLICT (id) DO NOTHING \
                     RETURNING *",
                )
                .bind(id)
                .bind(&fallback)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to create profile", e)
                })?
                .ok_or_else(|| AppError::internal("Profile vanished during creation"))
            }
            Err(e) => Err(AppError::with_source(
                ErrorKind::Database,
                "Failed to create profile",
                e,
            )),
        }
    }

    /// Partially update the caller's own profile.
    pub async fn update(&self, caller: Uuid, data: &UpdateProfile) -> AppResult<Profile> {
        sqlx::query_as::<_, Profile>(
            "UPDATE profiles SET username = COALESCE($2, username), \
                                 full_name = COALESCE($3, full_name), \
                                 avatar_url = COALESCE($4, avatar_url), \
                                 dietary_preferences = COALESCE($5, dietary_preferences), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(caller)
        .bind(&data.username)
        .bind(&data.full_name)
        .bind(&data.avatar_url)
        .bind(&data.dietary_preferences)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("profiles_username_key") =>
            {
                AppError::conflict("Username already taken")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update profile", e),
        })?
        .ok_or_else(|| AppError::not_found("Profile not found"))
    }
}
