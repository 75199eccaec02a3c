//! Recipe domain services.

pub mod ingredients;
pub mod service;
pub mod tagging;

pub use ingredients::IngredientService;
pub use service::RecipeService;
pub use tagging::RecipeTagService;
