//! Integration tests.
//!
//! These run against a real PostgreSQL instance (see `config/test.toml`,
//! overridable with `TEST_DATABASE_URL`) and exercise the full stack from
//! router to database.

mod helpers;

mod health_test;
mod meal_plan_test;
mod profile_test;
mod recipe_test;
mod shopping_test;
mod tag_test;
