//! Recipe repository implementation.
//!
//! Reads widen to public rows; writes are owner-only. The ownership
//! predicate rides inside each statement (`AND user_id = $caller`), so a
//! denied write simply matches zero rows in the same transaction as the
//! attempted effect. Zero-row outcomes are then classified: a row the
//! caller could see (a public recipe) reports Forbidden, a row they could
//! not see reports NotFound so denial never leaks existence.

use sqlx::PgPool;
use uuid::Uuid;

use mealhub_core::error::{AppError, ErrorKind};
use mealhub_core::result::AppResult;
use mealhub_core::types::pagination::{PageRequest, PageResponse};
use mealhub_entity::recipe::{CreateRecipe, Recipe, RecipeVisibility, UpdateRecipe};

/// Repository for recipe CRUD and visibility-scoped queries.
#[derive(Debug, Clone)]
pub struct RecipeRepository {
    pool: PgPool,
}

impl RecipeRepository {
    /// Create a new recipe repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a recipe the caller may see: their own, or a public one.
    pub async fn find_visible_by_id(&self, caller: Uuid, id: Uuid) -> AppResult<Option<Recipe>> {
        sqlx::query_as::<_, Recipe>(
            "SELECT * FROM recipes WHERE id = $1 AND (is_public OR user_id = $2)",
        )
        .bind(id)
        .bind(caller)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find recipe by id", e))
    }

    /// List recipes under a visibility filter, optionally narrowed by a
    /// title substring, newest first.
    pub async fn find_visible(
        &self,
        caller: Uuid,
        visibility: RecipeVisibility,
        title_query: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Recipe>> {
        let scope = match visibility {
            RecipeVisibility::Mine => "user_id = $1",
            RecipeVisibility::Public => "is_public",
            RecipeVisibility::All => "(is_public OR user_id = $1)",
        };
        let pattern = title_query.map(|q| format!("%{q}%"));

        let count_sql = format!(
            "SELECT COUNT(*) FROM recipes WHERE {scope} AND ($2::text IS NULL OR title ILIKE $2)"
        );
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(caller)
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count recipes", e)
            })?;

        let list_sql = format!(
            "SELECT * FROM recipes WHERE {scope} AND ($2::text IS NULL OR title ILIKE $2) \
             ORDER BY created_at DESC LIMIT $3 OFFSET $4"
        );
        let recipes = sqlx::query_as::<_, Recipe>(&list_sql)
            .bind(caller)
            .bind(&pattern)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list recipes", e))?;

        Ok(PageResponse::new(
            recipes,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new recipe owned by the caller.
    ///
    /// The new row's owner field must equal the caller's identity; a
    /// mismatch is an authorization failure, not a validation error.
    pub async fn create(&self, caller: Uuid, data: &CreateRecipe) -> AppResult<Recipe> {
        if data.user_id != caller {
            return Err(AppError::forbidden(
                "Recipe owner must match the authenticated identity",
            ));
        }

        sqlx::query_as::<_, Recipe>(
            "INSERT INTO recipes (user_id, title, description, instructions, \
                                  prep_time_minutes, cook_time_minutes, servings, difficulty, \
                                  estimated_cost, calories_per_serving, image_url, source_url, \
                                  is_public) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.instructions)
        .bind(data.prep_time_minutes)
        .bind(data.cook_time_minutes)
        .bind(data.servings)
        .bind(data.difficulty)
        .bind(data.estimated_cost)
        .bind(data.calories_per_serving)
        .bind(&data.image_url)
        .bind(&data.source_url)
        .bind(data.is_public)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::conflict("No profile exists for the owning identity")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create recipe", e),
        })
    }

    /// Partially update a recipe the caller owns.
    pub async fn update(&self, caller: Uuid, id: Uuid, data: &UpdateRecipe) -> AppResult<Recipe> {
        let updated = sqlx::query_as::<_, Recipe>(
            "UPDATE recipes SET title = COALESCE($3, title), \
                                description = COALESCE($4, description), \
                                instructions = COALESCE($5, instructions), \
                                prep_time_minutes = COALESCE($6, prep_time_minutes), \
                                cook_time_minutes = COALESCE($7, cook_time_minutes), \
                                servings = COALESCE($8, servings), \
                                difficulty = COALESCE($9, difficulty), \
                                estimated_cost = COALESCE($10, estimated_cost), \
                                calories_per_serving = COALESCE($11, calories_per_serving), \
                                image_url = COALESCE($12, image_url), \
                                source_url = COALESCE($13, source_url), \
                                is_public = COALESCE($14, is_public), \
                                updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(caller)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.instructions)
        .bind(data.prep_time_minutes)
        .bind(data.cook_time_minutes)
        .bind(data.servings)
        .bind(data.difficulty)
        .bind(data.estimated_cost)
        .bind(data.calories_per_serving)
        .bind(&data.image_url)
        .bind(&data.source_url)
        .bind(data.is_public)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update recipe", e))?;

        match updated {
            Some(recipe) => Ok(recipe),
            None => Err(self.classify_inaccessible(caller, id).await?),
        }
    }

    /// Delete a recipe the caller owns. Ingredient and tag-link rows
    /// cascade away in the same transaction.
    pub async fn delete(&self, caller: Uuid, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(caller)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete recipe", e))?;

        if result.rows_affected() == 0 {
            return Err(self.classify_inaccessible(caller, id).await?);
        }
        Ok(())
    }

    /// Explain a zero-row write outcome: Forbidden when the row is visible
    /// to the caller but not theirs, NotFound otherwise.
    async fn classify_inaccessible(&self, caller: Uuid, id: Uuid) -> AppResult<AppError> {
        let row: Option<(Uuid, bool)> =
            sqlx::query_as("SELECT user_id, is_public FROM recipes WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to inspect recipe", e)
                })?;

        Ok(match row {
            Some((owner, is_public)) if owner != caller && is_public => {
                AppError::forbidden("Only the recipe owner may modify it")
            }
            _ => AppError::not_found(format!("Recipe {id} not found")),
        })
    }
}
