//! Profile reads and self-updates.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mealhub_auth::policy::{Operation, PolicyGate, ProtectedTable};
use mealhub_core::error::AppError;
use mealhub_database::repositories::profile::ProfileRepository;
use mealhub_entity::profile::{Profile, UpdateProfile};

use crate::context::RequestContext;

/// Manages profile access. Every path is self-scoped: the only row in
/// reach is the one keyed by the caller's own identity.
#[derive(Debug, Clone)]
pub struct ProfileService {
    /// Profile repository.
    repo: Arc<ProfileRepository>,
    /// Policy gate.
    gate: PolicyGate,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(repo: Arc<ProfileRepository>) -> Self {
        Self {
            repo,
            gate: PolicyGate::new(),
        }
    }

    /// Trusted get-or-create invoked when a verified token is first seen.
    ///
    /// This bypasses the gate deliberately: caller-facing profile inserts
    /// are denied, and this is the only way a row comes into existence.
    pub async fn ensure_profile(
        &self,
        user_id: Uuid,
        username_hint: Option<&str>,
    ) -> Result<Profile, AppError> {
        self.repo.ensure_exists(user_id, username_hint).await
    }

    /// Fetch the caller's own profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<Profile, AppError> {
        self.gate
            .authorize(ProtectedTable::Profiles, Operation::Select)?;
        self.repo
            .find_self(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Profile not found"))
    }

    /// Partially update the caller's own profile.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        data: UpdateProfile,
    ) -> Result<Profile, AppError> {
        self.gate
            .authorize(ProtectedTable::Profiles, Operation::Update)?;

        if let Some(username) = &data.username {
            if username.trim().is_empty() {
                return Err(AppError::validation("Username cannot be empty"));
            }
            if username.len() > 64 {
                return Err(AppError::validation("Username is too long"));
            }
        }

        let profile = self.repo.update(ctx.user_id, &data).await?;

        info!(user_id = %ctx.user_id, "Profile updated");

        Ok(profile)
    }
}
