//! Tag attachment on recipes.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mealhub_auth::policy::{Operation, PolicyGate, ProtectedTable};
use mealhub_core::error::AppError;
use mealhub_database::repositories::recipe_tag::RecipeTagRepository;
use mealhub_entity::tag::Tag;

use crate::context::RequestContext;

/// Manages tag links between recipes and the shared catalog.
#[derive(Debug, Clone)]
pub struct RecipeTagService {
    /// Tag-link repository.
    repo: Arc<RecipeTagRepository>,
    /// Policy gate.
    gate: PolicyGate,
}

impl RecipeTagService {
    /// Creates a new recipe tag service.
    pub fn new(repo: Arc<RecipeTagRepository>) -> Self {
        Self {
            repo,
            gate: PolicyGate::new(),
        }
    }

    /// List the catalog tags attached to a recipe. Links are globally
    /// readable, so no row scoping applies.
    pub async fn list_recipe_tags(
        &self,
        _ctx: &RequestContext,
        recipe_id: Uuid,
    ) -> Result<Vec<Tag>, AppError> {
        self.gate
            .authorize(ProtectedTable::RecipeTags, Operation::Select)?;
        self.repo.find_tags_for_recipe(recipe_id).await
    }

    /// Attach a catalog tag to a recipe the caller owns.
    pub async fn attach_tag(
        &self,
        ctx: &RequestContext,
        recipe_id: Uuid,
        tag_id: Uuid,
    ) -> Result<(), AppError> {
        self.gate
            .authorize(ProtectedTable::RecipeTags, Operation::Insert)?;

        self.repo.attach(ctx.user_id, recipe_id, tag_id).await?;

        info!(
            user_id = %ctx.user_id,
            recipe_id = %recipe_id,
            tag_id = %tag_id,
            "Tag attached"
        );

        Ok(())
    }

    /// Detach a catalog tag from a recipe the caller owns.
    pub async fn detach_tag(
        &self,
        ctx: &RequestContext,
        recipe_id: Uuid,
        tag_id: Uuid,
    ) -> Result<(), AppError> {
        self.gate
            .authorize(ProtectedTable::RecipeTags, Operation::Delete)?;

        self.repo.detach(ctx.user_id, recipe_id, tag_id).await?;

        info!(
            user_id = %ctx.user_id,
            recipe_id = %recipe_id,
            tag_id = %tag_id,
            "Tag detached"
        );

        Ok(())
    }
}
