//! Business logic services for MealHub.
//!
//! Each service consults the policy gate before touching a repository, so
//! denied (table, operation) pairs are rejected before any SQL runs;
//! row-level predicates are then enforced inside the repository statements
//! themselves.

pub mod context;
pub mod meal_plan;
pub mod profile;
pub mod recipe;
pub mod shopping;
pub mod tag;
