//! Shopping list entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A shopping list, optionally generated against a meal plan.
///
/// `meal_plan_id` is a plain reference, not a foreign key: the plan may be
/// deleted independently, leaving a dangling-but-tolerated reference.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ShoppingList {
    /// Unique list identifier.
    pub id: Uuid,
    /// Owning identity.
    pub user_id: Uuid,
    /// Title.
    pub title: String,
    /// Linked meal plan (may dangle).
    pub meal_plan_id: Option<Uuid>,
    /// Whether the list has been fully shopped.
    pub is_completed: bool,
    /// Running total cost.
    pub total_cost: Option<f64>,
    /// When the list was created.
    pub created_at: DateTime<Utc>,
    /// When the list was last updated (advisory).
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new shopping list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShoppingList {
    /// Owning identity.
    pub user_id: Uuid,
    /// Title.
    pub title: String,
    /// Linked meal plan.
    pub meal_plan_id: Option<Uuid>,
}

/// Partial-field update for a shopping list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateShoppingList {
    /// New title.
    pub title: Option<String>,
    /// New linked meal plan.
    pub meal_plan_id: Option<Uuid>,
    /// New completed flag.
    pub is_completed: Option<bool>,
    /// New total cost.
    pub total_cost: Option<f64>,
}
