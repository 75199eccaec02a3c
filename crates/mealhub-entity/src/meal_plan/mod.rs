//! Meal plan domain entities.

pub mod item;
pub mod meal_type;
pub mod model;

pub use item::{CreateMealPlanItem, MealPlanItem, UpdateMealPlanItem};
pub use meal_type::MealType;
pub use model::{CreateMealPlan, MealPlan, UpdateMealPlan};
