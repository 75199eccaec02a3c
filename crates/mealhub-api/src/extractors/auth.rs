//! `AuthUser` extractor — verifies the provider token and injects context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use mealhub_core::error::AppError;
use mealhub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated identity context available in handlers.
///
/// Extraction verifies the Bearer token against the identity provider's
/// signing secret and runs the trusted profile get-or-create, so by the
/// time a handler sees this value the caller's profile row exists.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let claims = state.verifier.verify(token)?;

        // First authenticated access creates the profile row.
        let profile = state
            .profile_service
            .ensure_profile(claims.user_id(), claims.username.as_deref())
            .await?;

        Ok(AuthUser(RequestContext::new(profile.id, profile.username)))
    }
}
