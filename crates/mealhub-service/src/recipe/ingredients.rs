//! Ingredient operations under a recipe.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mealhub_auth::policy::{Operation, PolicyGate, ProtectedTable};
use mealhub_core::error::AppError;
use mealhub_database::repositories::recipe_ingredient::RecipeIngredientRepository;
use mealhub_entity::recipe::{CreateRecipeIngredient, RecipeIngredient, UpdateRecipeIngredient};

use crate::context::RequestContext;

/// Manages ingredient rows under recipes.
#[derive(Debug, Clone)]
pub struct IngredientService {
    /// Ingredient repository.
    repo: Arc<RecipeIngredientRepository>,
    /// Policy gate.
    gate: PolicyGate,
}

impl IngredientService {
    /// Creates a new ingredient service.
    pub fn new(repo: Arc<RecipeIngredientRepository>) -> Self {
        Self {
            repo,
            gate: PolicyGate::new(),
        }
    }

    /// List the ingredients of a recipe the caller may see.
    pub async fn list_ingredients(
        &self,
        ctx: &RequestContext,
        recipe_id: Uuid,
    ) -> Result<Vec<RecipeIngredient>, AppError> {
        self.gate
            .authorize(ProtectedTable::RecipeIngredients, Operation::Select)?;
        self.repo.find_by_recipe(ctx.user_id, recipe_id).await
    }

    /// Add an ingredient to a recipe the caller owns.
    pub async fn add_ingredient(
        &self,
        ctx: &RequestContext,
        data: CreateRecipeIngredient,
    ) -> Result<RecipeIngredient, AppError> {
        self.gate
            .authorize(ProtectedTable::RecipeIngredients, Operation::Insert)?;

        if data.name.trim().is_empty() {
            return Err(AppError::validation("Ingredient name cannot be empty"));
        }

        let ingredient = self.repo.create(ctx.user_id, &data).await?;

        info!(
            user_id = %ctx.user_id,
            recipe_id = %data.recipe_id,
            ingredient_id = %ingredient.id,
            "Ingredient added"
        );

        Ok(ingredient)
    }

    /// Partially update an ingredient of a recipe the caller owns.
    pub async fn update_ingredient(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateRecipeIngredient,
    ) -> Result<RecipeIngredient, AppError> {
        self.gate
            .authorize(ProtectedTable::RecipeIngredients, Operation::Update)?;

        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Ingredient name cannot be empty"));
            }
        }

        let ingredient = self.repo.update(ctx.user_id, id, &data).await?;

        info!(user_id = %ctx.user_id, ingredient_id = %id, "Ingredient updated");

        Ok(ingredient)
    }

    /// Remove an ingredient from a recipe the caller owns.
    pub async fn remove_ingredient(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<(), AppError> {
        self.gate
            .authorize(ProtectedTable::RecipeIngredients, Operation::Delete)?;

        self.repo.delete(ctx.user_id, id).await?;

        info!(user_id = %ctx.user_id, ingredient_id = %id, "Ingredient removed");

        Ok(())
    }
}
