//! Tag type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categories a catalog tag can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "tag_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TagType {
    /// Regional cuisine (italian, thai, ...).
    Cuisine,
    /// Course (appetizer, main, dessert, ...).
    Course,
    /// Dietary restriction (vegan, gluten-free, ...).
    Dietary,
    /// Headline ingredient (chicken, tofu, ...).
    Ingredient,
    /// Cooking method (grilled, slow-cooked, ...).
    Method,
    /// Difficulty label.
    Difficulty,
}

impl TagType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cuisine => "cuisine",
            Self::Course => "course",
            Self::Dietary => "dietary",
            Self::Ingredient => "ingredient",
            Self::Method => "method",
            Self::Difficulty => "difficulty",
        }
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TagType {
    type Err = mealhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cuisine" => Ok(Self::Cuisine),
            "course" => Ok(Self::Course),
            "dietary" => Ok(Self::Dietary),
            "ingredient" => Ok(Self::Ingredient),
            "method" => Ok(Self::Method),
            "difficulty" => Ok(Self::Difficulty),
            _ => Err(mealhub_core::AppError::validation(format!(
                "Invalid tag type: '{s}'. Expected one of: cuisine, course, dietary, ingredient, method, difficulty"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("cuisine".parse::<TagType>().unwrap(), TagType::Cuisine);
        assert_eq!("DIETARY".parse::<TagType>().unwrap(), TagType::Dietary);
        assert!("flavour".parse::<TagType>().is_err());
    }

    #[test]
    fn test_round_trip() {
        for t in [
            TagType::Cuisine,
            TagType::Course,
            TagType::Dietary,
            TagType::Ingredient,
            TagType::Method,
            TagType::Difficulty,
        ] {
            assert_eq!(t.as_str().parse::<TagType>().unwrap(), t);
        }
    }
}
