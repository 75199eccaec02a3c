//! Recipe-to-tag join entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Join row linking a recipe to a catalog tag.
///
/// Composite primary key `(recipe_id, tag_id)`; cascades away when either
/// side is deleted. Readable by anyone, writable only by the recipe owner.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecipeTag {
    /// Tagged recipe.
    pub recipe_id: Uuid,
    /// Catalog tag.
    pub tag_id: Uuid,
}
