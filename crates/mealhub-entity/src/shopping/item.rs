//! Shopping list item entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One line on a shopping list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ShoppingListItem {
    /// Unique item identifier.
    pub id: Uuid,
    /// Parent list. Rows cascade away with the list.
    pub shopping_list_id: Uuid,
    /// What to buy.
    pub ingredient_name: String,
    /// Quantity.
    pub amount: Option<f64>,
    /// Unit for the quantity.
    pub unit: Option<String>,
    /// Whether the item has been picked up.
    pub is_checked: bool,
    /// Store section ("produce", "dairy", ...).
    pub category: Option<String>,
    /// Estimated cost.
    pub estimated_cost: Option<f64>,
    /// Actual cost once bought.
    pub actual_cost: Option<f64>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Data required to add an item to a shopping list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShoppingListItem {
    /// Parent list.
    pub shopping_list_id: Uuid,
    /// What to buy.
    pub ingredient_name: String,
    /// Quantity.
    pub amount: Option<f64>,
    /// Unit for the quantity.
    pub unit: Option<String>,
    /// Store section.
    pub category: Option<String>,
    /// Estimated cost.
    pub estimated_cost: Option<f64>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Partial-field update for a shopping list item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateShoppingListItem {
    /// New name.
    pub ingredient_name: Option<String>,
    /// New quantity.
    pub amount: Option<f64>,
    /// New unit.
    pub unit: Option<String>,
    /// New checked flag.
    pub is_checked: Option<bool>,
    /// New store section.
    pub category: Option<String>,
    /// New estimated cost.
    pub estimated_cost: Option<f64>,
    /// New actual cost.
    pub actual_cost: Option<f64>,
    /// New notes.
    pub notes: Option<String>,
}
