//! Recipe domain entities.

pub mod difficulty;
pub mod ingredient;
pub mod model;
pub mod tag_link;

pub use difficulty::Difficulty;
pub use ingredient::{CreateRecipeIngredient, RecipeIngredient, UpdateRecipeIngredient};
pub use model::{CreateRecipe, Recipe, RecipeVisibility, UpdateRecipe};
pub use tag_link::RecipeTag;
