//! Meal plan domain services.

pub mod items;
pub mod service;

pub use items::MealPlanItemService;
pub use service::MealPlanService;
