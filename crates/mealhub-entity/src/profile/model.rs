//! Profile entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user profile.
///
/// The primary key is the identity provider's stable user id, so there is
/// exactly one profile per identity. Rows are created through the trusted
/// get-or-create path on first authenticated access, never by a
/// caller-facing insert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    /// Identity provider user id.
    pub id: Uuid,
    /// Unique handle.
    pub username: String,
    /// Human-readable full name.
    pub full_name: Option<String>,
    /// Avatar image reference.
    pub avatar_url: Option<String>,
    /// Ordered dietary-preference tags (e.g. "vegetarian", "gluten-free").
    pub dietary_preferences: Vec<String>,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated (advisory).
    pub updated_at: DateTime<Utc>,
}

/// Partial-field update for a profile. `None` leaves the column untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New username.
    pub username: Option<String>,
    /// New full name.
    pub full_name: Option<String>,
    /// New avatar reference.
    pub avatar_url: Option<String>,
    /// Replacement dietary-preference list.
    pub dietary_preferences: Option<Vec<String>>,
}
