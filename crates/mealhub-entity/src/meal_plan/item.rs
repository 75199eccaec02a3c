//! Meal plan item entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::meal_type::MealType;

/// One scheduled meal inside a plan.
///
/// `recipe_id` is a plain reference, not a foreign key: the recipe may be
/// deleted independently, leaving a dangling-but-tolerated reference.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MealPlanItem {
    /// Unique item identifier.
    pub id: Uuid,
    /// Parent plan. Rows cascade away with the plan.
    pub meal_plan_id: Uuid,
    /// Referenced recipe (may dangle).
    pub recipe_id: Uuid,
    /// Day this meal is scheduled for.
    pub date: NaiveDate,
    /// Which meal of the day.
    pub meal_type: MealType,
    /// Planned servings.
    pub servings: i32,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Data required to schedule a meal inside a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMealPlanItem {
    /// Parent plan.
    pub meal_plan_id: Uuid,
    /// Referenced recipe.
    pub recipe_id: Uuid,
    /// Scheduled day.
    pub date: NaiveDate,
    /// Which meal of the day.
    pub meal_type: MealType,
    /// Planned servings (defaults to 1 when omitted).
    pub servings: Option<i32>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Partial-field update for a plan item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMealPlanItem {
    /// New recipe reference.
    pub recipe_id: Option<Uuid>,
    /// New scheduled day.
    pub date: Option<NaiveDate>,
    /// New meal type.
    pub meal_type: Option<MealType>,
    /// New servings count.
    pub servings: Option<i32>,
    /// New notes.
    pub notes: Option<String>,
}
