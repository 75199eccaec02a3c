//! Row-level access policy for every protected table.

pub mod catalog;
pub mod gate;

pub use catalog::{AccessRule, Operation, ProtectedTable, rule_for};
pub use gate::PolicyGate;
