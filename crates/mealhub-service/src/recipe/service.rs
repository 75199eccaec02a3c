//! Recipe CRUD with visibility-scoped reads and owner-only writes.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mealhub_auth::policy::{Operation, PolicyGate, ProtectedTable};
use mealhub_core::error::AppError;
use mealhub_core::types::pagination::{PageRequest, PageResponse};
use mealhub_database::repositories::recipe::RecipeRepository;
use mealhub_entity::recipe::{CreateRecipe, Recipe, RecipeVisibility, UpdateRecipe};

use crate::context::RequestContext;

/// Manages recipe CRUD operations.
#[derive(Debug, Clone)]
pub struct RecipeService {
    /// Recipe repository.
    repo: Arc<RecipeRepository>,
    /// Policy gate.
    gate: PolicyGate,
}

impl RecipeService {
    /// Creates a new recipe service.
    pub fn new(repo: Arc<RecipeRepository>) -> Self {
        Self {
            repo,
            gate: PolicyGate::new(),
        }
    }

    /// Fetch a recipe the caller may see.
    pub async fn get_recipe(&self, ctx: &RequestContext, id: Uuid) -> Result<Recipe, AppError> {
        self.gate
            .authorize(ProtectedTable::Recipes, Operation::Select)?;
        self.repo
            .find_visible_by_id(ctx.user_id, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe {id} not found")))
    }

    /// List recipes under a visibility filter, optionally searched by
    /// title substring.
    pub async fn list_recipes(
        &self,
        ctx: &RequestContext,
        visibility: RecipeVisibility,
        title_query: Option<&str>,
        page: PageRequest,
    ) -> Result<PageResponse<Recipe>, AppError> {
        self.gate
            .authorize(ProtectedTable::Recipes, Operation::Select)?;
        self.repo
            .find_visible(ctx.user_id, visibility, title_query, &page)
            .await
    }

    /// Create a recipe. The payload's owner must be the caller.
    pub async fn create_recipe(
        &self,
        ctx: &RequestContext,
        data: CreateRecipe,
    ) -> Result<Recipe, AppError> {
        self.gate
            .authorize(ProtectedTable::Recipes, Operation::Insert)?;

        if data.title.trim().is_empty() {
            return Err(AppError::validation("Recipe title cannot be empty"));
        }
        if let Some(servings) = data.servings {
            if servings < 1 {
                return Err(AppError::validation("Servings must be at least 1"));
            }
        }

        let recipe = self.repo.create(ctx.user_id, &data).await?;

        info!(
            user_id = %ctx.user_id,
            recipe_id = %recipe.id,
            is_public = recipe.is_public,
            "Recipe created"
        );

        Ok(recipe)
    }

    /// Partially update a recipe the caller owns.
    pub async fn update_recipe(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateRecipe,
    ) -> Result<Recipe, AppError> {
        self.gate
            .authorize(ProtectedTable::Recipes, Operation::Update)?;

        if let Some(title) = &data.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("Recipe title cannot be empty"));
            }
        }
        if let Some(servings) = data.servings {
            if servings < 1 {
                return Err(AppError::validation("Servings must be at least 1"));
            }
        }

        let recipe = self.repo.update(ctx.user_id, id, &data).await?;

        info!(user_id = %ctx.user_id, recipe_id = %id, "Recipe updated");

        Ok(recipe)
    }

    /// Delete a recipe the caller owns.
    pub async fn delete_recipe(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.gate
            .authorize(ProtectedTable::Recipes, Operation::Delete)?;

        self.repo.delete(ctx.user_id, id).await?;

        info!(user_id = %ctx.user_id, recipe_id = %id, "Recipe deleted");

        Ok(())
    }
}
