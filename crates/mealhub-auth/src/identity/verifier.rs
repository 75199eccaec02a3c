//! Session token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use mealhub_core::config::identity::IdentityConfig;
use mealhub_core::error::AppError;

use super::claims::IdentityClaims;

/// Verifies HS256 session tokens issued by the external identity provider.
#[derive(Clone)]
pub struct IdentityVerifier {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for IdentityVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl IdentityVerifier {
    /// Creates a new verifier from identity configuration.
    pub fn new(config: &IdentityConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;
        if !config.issuer.is_empty() {
            validation.set_issuer(&[config.issuer.clone()]);
        }

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a session token string.
    ///
    /// Checks signature validity, expiration (with configured leeway), and
    /// the issuer when one is configured. A failed verification is an
    /// `Unauthorized` error; there is no session to act as.
    pub fn verify(&self, token: &str) -> Result<IdentityClaims, AppError> {
        decode::<IdentityClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::unauthorized(format!("Invalid session token: {e}")))
    }
}
