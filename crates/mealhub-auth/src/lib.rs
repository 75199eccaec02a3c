//! # mealhub-auth
//!
//! Identity verification and row-level access policy for MealHub.
//!
//! ## Modules
//!
//! - `identity` — verification of session tokens issued by the external
//!   identity provider (the provider's own sign-up/sign-in flow is out of
//!   scope; we only consume its HS256 tokens)
//! - `policy` — the per-table access rule catalog and the gate services
//!   consult before every operation
//!
//! The catalog is exhaustive over every (table, operation) pair: a denied
//! pair is an explicit [`policy::AccessRule::Deny`], never a missing match
//! arm, so the default-deny posture is visible at compile time.

pub mod identity;
pub mod policy;

pub use identity::{IdentityClaims, IdentityVerifier};
pub use policy::{AccessRule, Operation, PolicyGate, ProtectedTable};
