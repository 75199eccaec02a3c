//! Recipe difficulty enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How demanding a recipe is to cook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "recipe_difficulty", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Weeknight-friendly.
    Easy,
    /// Some technique required.
    Medium,
    /// Involved or time-consuming.
    Hard,
}

impl Difficulty {
    /// Return the difficulty as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = mealhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(mealhub_core::AppError::validation(format!(
                "Invalid difficulty: '{s}'. Expected one of: easy, medium, hard"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("expert".parse::<Difficulty>().is_err());
    }
}
