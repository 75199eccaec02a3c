//! # mealhub-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all MealHub entities.
//!
//! Every repository method that touches a protected table takes the
//! caller's identity explicitly and embeds the row-level predicate in the
//! statement itself, so the store evaluates the policy atomically with the
//! guarded operation — there is no check-then-act window.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
