//! Meal plan entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A meal plan covering a date range.
///
/// The range is advisory: `start_date <= end_date` is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MealPlan {
    /// Unique plan identifier.
    pub id: Uuid,
    /// Owning identity.
    pub user_id: Uuid,
    /// Title.
    pub title: String,
    /// First day of the plan.
    pub start_date: NaiveDate,
    /// Last day of the plan.
    pub end_date: NaiveDate,
    /// Free-form notes.
    pub notes: Option<String>,
    /// When the plan was created.
    pub created_at: DateTime<Utc>,
    /// When the plan was last updated (advisory).
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new meal plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMealPlan {
    /// Owning identity.
    pub user_id: Uuid,
    /// Title.
    pub title: String,
    /// First day of the plan.
    pub start_date: NaiveDate,
    /// Last day of the plan.
    pub end_date: NaiveDate,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Partial-field update for a meal plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMealPlan {
    /// New title.
    pub title: Option<String>,
    /// New start date.
    pub start_date: Option<NaiveDate>,
    /// New end date.
    pub end_date: Option<NaiveDate>,
    /// New notes.
    pub notes: Option<String>,
}
