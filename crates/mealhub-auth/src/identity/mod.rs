//! Identity provider token handling.

pub mod claims;
pub mod verifier;

pub use claims::IdentityClaims;
pub use verifier::IdentityVerifier;
