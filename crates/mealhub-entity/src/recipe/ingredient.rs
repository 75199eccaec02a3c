//! Recipe ingredient entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One ingredient line of a recipe.
///
/// Ownership is inherited from the parent recipe and resolved at access
/// time through the parent table, not stored here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecipeIngredient {
    /// Unique ingredient identifier.
    pub id: Uuid,
    /// Parent recipe. Rows cascade away with the recipe.
    pub recipe_id: Uuid,
    /// Ingredient name.
    pub name: String,
    /// Quantity.
    pub amount: Option<f64>,
    /// Unit for the quantity ("g", "cup", ...).
    pub unit: Option<String>,
    /// Free-form notes ("finely chopped").
    pub notes: Option<String>,
}

/// Data required to add an ingredient to a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecipeIngredient {
    /// Parent recipe.
    pub recipe_id: Uuid,
    /// Ingredient name.
    pub name: String,
    /// Quantity.
    pub amount: Option<f64>,
    /// Unit for the quantity.
    pub unit: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Partial-field update for an ingredient line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRecipeIngredient {
    /// New name.
    pub name: Option<String>,
    /// New quantity.
    pub amount: Option<f64>,
    /// New unit.
    pub unit: Option<String>,
    /// New notes.
    pub notes: Option<String>,
}
