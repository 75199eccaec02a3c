//! Recipe tag-link repository implementation.
//!
//! Join rows between recipes and the shared tag catalog. Reads are open to
//! any authenticated identity (tag assignments on public recipes are part
//! of discovery); writes require ownership of the parent recipe, resolved
//! through an existence sub-query in the statement itself.

use sqlx::PgPool;
use uuid::Uuid;

use mealhub_core::error::{AppError, ErrorKind};
use mealhub_core::result::AppResult;
use mealhub_entity::tag::Tag;

/// Repository for recipe/tag join rows.
#[derive(Debug, Clone)]
pub struct RecipeTagRepository {
    pool: PgPool,
}

impl RecipeTagRepository {
    /// Create a new tag-link repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the catalog tags attached to a recipe.
    pub async fn find_tags_for_recipe(&self, recipe_id: Uuid) -> AppResult<Vec<Tag>> {
        sqlx::query_as::<_, Tag>(
            "SELECT t.* FROM tags t \
             JOIN recipe_tags rt ON rt.tag_id = t.id \
             WHERE rt.recipe_id = $1 \
             ORDER BY t.tag_type ASC, t.name ASC",
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list recipe tags", e))
    }

    /// Attach a catalog tag to a recipe the caller owns.
    ///
    /// Attaching an already-attached tag is a no-op success.
    pub async fn attach(&self, caller: Uuid, recipe_id: Uuid, tag_id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "INSERT INTO recipe_tags (recipe_id, tag_id) \
             SELECT $1, $2 \
             WHERE EXISTS (SELECT 1 FROM recipes WHERE id = $1 AND user_id = $3) \
             ON CONFLICT (recipe_id, tag_id) DO NOTHING",
        )
        .bind(recipe_id)
        .bind(tag_id)
        .bind(caller)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::conflict(format!("Tag {tag_id} does not exist"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to attach tag", e),
        })?;

        if result.rows_affected() == 0 {
            // Either the recipe is not the caller's, or the link already
            // existed. Re-check the link to tell the two apart.
            let linked: bool = sqlx::query_scalar(
                "SELECT EXISTS (SELECT 1 FROM recipe_tags WHERE recipe_id = $1 AND tag_id = $2)",
            )
            .bind(recipe_id)
            .bind(tag_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to inspect tag link", e)
            })?;

            if !linked {
                return Err(self.classify_parent(caller, recipe_id, None).await?);
            }
        }
        Ok(())
    }

    /// Detach a catalog tag from a recipe the caller owns.
    pub async fn detach(&self, caller: Uuid, recipe_id: Uuid, tag_id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "DELETE FROM recipe_tags rt \
             WHERE rt.recipe_id = $1 AND rt.tag_id = $2 \
               AND EXISTS (SELECT 1 FROM recipes r WHERE r.id = $1 AND r.user_id = $3)",
        )
        .bind(recipe_id)
        .bind(tag_id)
        .bind(caller)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to detach tag", e))?;

        if result.rows_affected() == 0 {
            return Err(self.classify_parent(caller, recipe_id, Some(tag_id)).await?);
        }
        Ok(())
    }

    /// Explain a denied write in terms of the parent recipe.
    async fn classify_parent(
        &self,
        caller: Uuid,
        recipe_id: Uuid,
        missing_link: Option<Uuid>,
    ) -> AppResult<AppError> {
        let row: Option<(Uuid, bool)> =
            sqlx::query_as("SELECT user_id, is_public FROM recipes WHERE id = $1")
                .bind(recipe_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to inspect recipe", e)
                })?;

        Ok(match row {
            Some((owner, _)) if owner == caller => match missing_link {
                Some(tag_id) => AppError::not_found(format!(
                    "Tag {tag_id} is not attached to recipe {recipe_id}"
                )),
                None => AppError::not_found(format!("Recipe {recipe_id} not found")),
            },
            Some((_, is_public)) if is_public => {
                AppError::forbidden("Only the recipe owner may change its tags")
            }
            _ => AppError::not_found(format!("Recipe {recipe_id} not found")),
        })
    }
}
