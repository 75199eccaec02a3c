//! Identity provider configuration.
//!
//! MealHub does not run its own sign-up/sign-in flow. An external identity
//! provider issues HS256 session tokens; this section holds what is needed
//! to verify them.

use serde::{Deserialize, Serialize};

/// Identity provider token verification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Shared secret the provider signs session tokens with (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Expected `iss` claim. Empty disables issuer checking.
    #[serde(default)]
    pub issuer: String,
    /// Clock-skew leeway in seconds when validating `exp`.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_leeway() -> u64 {
    5
}
