//! # mealhub-entity
//!
//! Domain entity models for MealHub. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod meal_plan;
pub mod profile;
pub mod recipe;
pub mod shopping;
pub mod tag;
