//! Tag entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::tag_type::TagType;

/// A shared catalog tag.
///
/// The catalog is administratively managed (seeded by migration) and
/// readable by every authenticated identity; no caller can write it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tag {
    /// Unique tag identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Tag category.
    pub tag_type: TagType,
    /// When the tag was created.
    pub created_at: DateTime<Utc>,
}
