//! Claims carried in a provider-issued session token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims extracted from a verified identity-provider session token.
///
/// `sub` is the provider's stable user identifier and doubles as the
/// profile primary key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Stable user identifier.
    pub sub: Uuid,
    /// Expiration time (seconds since epoch).
    pub exp: i64,
    /// Issued-at time (seconds since epoch).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Username hint from the provider, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Email hint from the provider, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl IdentityClaims {
    /// Returns the stable user identifier.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }
}
