//! Recipe entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::difficulty::Difficulty;

/// A recipe owned by a single identity.
///
/// Visible to its owner always, and to everyone else only while
/// `is_public` is set.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    /// Unique recipe identifier.
    pub id: Uuid,
    /// Owning identity.
    pub user_id: Uuid,
    /// Title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Ordered instruction steps. Never null; may be empty while drafting.
    pub instructions: Vec<String>,
    /// Preparation time in minutes.
    pub prep_time_minutes: Option<i32>,
    /// Cooking time in minutes.
    pub cook_time_minutes: Option<i32>,
    /// Number of servings the recipe yields.
    pub servings: Option<i32>,
    /// Difficulty rating.
    pub difficulty: Option<Difficulty>,
    /// Estimated total cost.
    pub estimated_cost: Option<f64>,
    /// Calories per serving.
    pub calories_per_serving: Option<i32>,
    /// Image reference.
    pub image_url: Option<String>,
    /// Where the recipe came from.
    pub source_url: Option<String>,
    /// Whether the recipe is visible to other identities.
    pub is_public: bool,
    /// When the recipe was created.
    pub created_at: DateTime<Utc>,
    /// When the recipe was last updated (advisory).
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new recipe.
///
/// `user_id` must equal the caller's identity; the policy layer rejects a
/// mismatching owner on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecipe {
    /// Owning identity.
    pub user_id: Uuid,
    /// Title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Ordered instruction steps.
    pub instructions: Vec<String>,
    /// Preparation time in minutes.
    pub prep_time_minutes: Option<i32>,
    /// Cooking time in minutes.
    pub cook_time_minutes: Option<i32>,
    /// Number of servings.
    pub servings: Option<i32>,
    /// Difficulty rating.
    pub difficulty: Option<Difficulty>,
    /// Estimated total cost.
    pub estimated_cost: Option<f64>,
    /// Calories per serving.
    pub calories_per_serving: Option<i32>,
    /// Image reference.
    pub image_url: Option<String>,
    /// Source reference.
    pub source_url: Option<String>,
    /// Public visibility flag.
    pub is_public: bool,
}

/// Partial-field update for a recipe. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRecipe {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Replacement instruction list.
    pub instructions: Option<Vec<String>>,
    /// New prep time.
    pub prep_time_minutes: Option<i32>,
    /// New cook time.
    pub cook_time_minutes: Option<i32>,
    /// New servings count.
    pub servings: Option<i32>,
    /// New difficulty.
    pub difficulty: Option<Difficulty>,
    /// New estimated cost.
    pub estimated_cost: Option<f64>,
    /// New calories per serving.
    pub calories_per_serving: Option<i32>,
    /// New image reference.
    pub image_url: Option<String>,
    /// New source reference.
    pub source_url: Option<String>,
    /// New visibility flag.
    pub is_public: Option<bool>,
}

/// Visibility filter for recipe listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeVisibility {
    /// Only the caller's own recipes.
    Mine,
    /// Only public recipes (anyone's).
    Public,
    /// Everything the caller may see: own rows plus public rows.
    All,
}

impl Default for RecipeVisibility {
    fn default() -> Self {
        Self::All
    }
}
