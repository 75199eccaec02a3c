//! Meal type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which meal of the day a plan item covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "meal_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Morning meal.
    Breakfast,
    /// Midday meal.
    Lunch,
    /// Evening meal.
    Dinner,
    /// Anything in between.
    Snack,
}

impl MealType {
    /// Return the meal type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MealType {
    type Err = mealhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            _ => Err(mealhub_core::AppError::validation(format!(
                "Invalid meal type: '{s}'. Expected one of: breakfast, lunch, dinner, snack"
            ))),
        }
    }
}
