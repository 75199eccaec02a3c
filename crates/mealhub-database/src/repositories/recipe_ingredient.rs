//! Recipe ingredient repository implementation.
//!
//! Ingredients inherit their owner from the parent recipe. Every write
//! carries an existence sub-query against `recipes` in the same statement,
//! so ownership is resolved transitively at access time — there is no
//! owner column here to drift out of sync.

use sqlx::PgPool;
use uuid::Uuid;

use mealhub_core::error::{AppError, ErrorKind};
use mealhub_core::result::AppResult;
use mealhub_entity::recipe::{CreateRecipeIngredient, RecipeIngredient, UpdateRecipeIngredient};

/// Repository for ingredient rows under a recipe.
#[derive(Debug, Clone)]
pub struct RecipeIngredientRepository {
    pool: PgPool,
}

impl RecipeIngredientRepository {
    /// Create a new ingredient repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the ingredients of a recipe the caller may see.
    ///
    /// An invisible recipe yields zero rows, indistinguishable from an
    /// empty ingredient list.
    pub async fn find_by_recipe(
        &self,
        caller: Uuid,
        recipe_id: Uuid,
    ) -> AppResult<Vec<RecipeIngredient>> {
        sqlx::query_as::<_, RecipeIngredient>(
            "SELECT i.* FROM recipe_ingredients i \
             JOIN recipes r ON r.id = i.recipe_id \
             WHERE i.recipe_id = $1 AND (r.is_public OR r.user_id = $2) \
             ORDER BY i.name ASC",
        )
        .bind(recipe_id)
        .bind(caller)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list ingredients", e))
    }

    /// Add an ingredient to a recipe the caller owns.
    pub async fn create(
        &self,
        caller: Uuid,
        data: &CreateRecipeIngredient,
    ) -> AppResult<RecipeIngredient> {
        let inserted = sqlx::query_as::<_, RecipeIngredient>(
            "INSERT INTO recipe_ingredients (recipe_id, name, amount, unit, notes) \
             SELECT $1, $2, $3, $4, $5 \
             WHERE EXISTS (SELECT 1 FROM recipes WHERE id = $1 AND user_id = $6) \
             RETURNING *",
        )
        .bind(data.recipe_id)
        .bind(&data.name)
        .bind(data.amount)
        .bind(&data.unit)
        .bind(&data.notes)
        .bind(caller)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add ingredient", e))?;

        match inserted {
            Some(ingredient) => Ok(ingredient),
            None => Err(self.classify_parent(caller, data.recipe_id).await?),
        }
    }

    /// Partially update an ingredient of a recipe the caller owns.
    pub async fn update(
        &self,
        caller: Uuid,
        id: Uuid,
        data: &UpdateRecipeIngredient,
    ) -> AppResult<RecipeIngredient> {
        let updated = sqlx::query_as::<_, RecipeIngredient>(
            "UPDATE recipe_ingredients i \
             SET name = COALESCE($3, name), \
                 amount = COALESCE($4, amount), \
                 unit = COALESCE($5, unit), \
                 notes = COALESCE($6, notes) \
             WHERE i.id = $1 \
               AND EXISTS (SELECT 1 FROM recipes r WHERE r.id = i.recipe_id AND r.user_id = $2) \
             RETURNING *",
        )
        .bind(id)
        .bind(caller)
        .bind(&data.name)
        .bind(data.amount)
        .bind(&data.unit)
        .bind(&data.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update ingredient", e)
        })?;

        match updated {
            Some(ingredient) => Ok(ingredient),
            None => Err(self.classify_row(caller, id).await?),
        }
    }

    /// Remove an ingredient from a recipe the caller owns.
    pub async fn delete(&self, caller: Uuid, id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "DELETE FROM recipe_ingredients i \
             WHERE i.id = $1 \
               AND EXISTS (SELECT 1 FROM recipes r WHERE r.id = i.recipe_id AND r.user_id = $2)",
        )
        .bind(id)
        .bind(caller)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete ingredient", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(self.classify_row(caller, id).await?);
        }
        Ok(())
    }

    /// Explain a zero-row write keyed by ingredient id.
    async fn classify_row(&self, caller: Uuid, id: Uuid) -> AppResult<AppError> {
        let parent: Option<Uuid> =
            sqlx::query_scalar("SELECT recipe_id FROM recipe_ingredients WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to inspect ingredient", e)
                })?;

        match parent {
            Some(recipe_id) => self.classify_parent(caller, recipe_id).await,
            None => Ok(AppError::not_found(format!("Ingredient {id} not found"))),
        }
    }

    /// Explain a denied write in terms of the parent recipe: Forbidden when
    /// the recipe is visible but not the caller's (public recipes stay
    /// read-only for everyone else), NotFound when it is invisible or gone.
    async fn classify_parent(&self, caller: Uuid, recipe_id: Uuid) -> AppResult<AppError> {
        let row: Option<(Uuid, bool)> =
            sqlx::query_as("SELECT user_id, is_public FROM recipes WHERE id = $1")
                .bind(recipe_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to inspect recipe", e)
                })?;

        Ok(match row {
            Some((owner, is_public)) if owner != caller && is_public => {
                AppError::forbidden("Only the recipe owner may modify its ingredients")
            }
            _ => AppError::not_found(format!("Recipe {recipe_id} not found")),
        })
    }
}
