//! Meal plan item repository implementation.
//!
//! Items inherit ownership from the parent plan through an existence
//! sub-query per statement. The referenced recipe id is deliberately not
//! validated here: the reference may dangle after the recipe is deleted.

use sqlx::PgPool;
use uuid::Uuid;

use mealhub_core::error::{AppError, ErrorKind};
use mealhub_core::result::AppResult;
use mealhub_entity::meal_plan::{CreateMealPlanItem, MealPlanItem, UpdateMealPlanItem};

/// Repository for scheduled meals inside a plan.
#[derive(Debug, Clone)]
pub struct MealPlanItemRepository {
    pool: PgPool,
}

impl MealPlanItemRepository {
    /// Create a new plan item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the items of a plan the caller owns, in schedule order.
    pub async fn find_by_plan(&self, caller: Uuid, plan_id: Uuid) -> AppResult<Vec<MealPlanItem>> {
        sqlx::query_as::<_, MealPlanItem>(
            "SELECT i.* FROM meal_plan_items i \
             JOIN meal_plans p ON p.id = i.meal_plan_id \
             WHERE i.meal_plan_id = $1 AND p.user_id = $2 \
             ORDER BY i.date ASC, i.meal_type ASC",
        )
        .bind(plan_id)
        .bind(caller)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list plan items", e))
    }

    /// Schedule a meal inside a plan the caller owns.
    pub async fn create(&self, caller: Uuid, data: &CreateMealPlanItem) -> AppResult<MealPlanItem> {
        let inserted = sqlx::query_as::<_, MealPlanItem>(
            "INSERT INTO meal_plan_items (meal_plan_id, recipe_id, date, meal_type, servings, notes) \
             SELECT $1, $2, $3, $4, $5, $6 \
             WHERE EXISTS (SELECT 1 FROM meal_plans WHERE id = $1 AND user_id = $7) \
             RETURNING *",
        )
        .bind(data.meal_plan_id)
        .bind(data.recipe_id)
        .bind(data.date)
        .bind(data.meal_type)
        .bind(data.servings.unwrap_or(1))
        .bind(&data.notes)
        .bind(caller)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add plan item", e))?;

        inserted.ok_or_else(|| {
            AppError::not_found(format!("Meal plan {} not found", data.meal_plan_id))
        })
    }

    /// Partially update an item of a plan the caller owns.
    pub async fn update(
        &self,
        caller: Uuid,
        id: Uuid,
        data: &UpdateMealPlanItem,
    ) -> AppResult<MealPlanItem> {
        sqlx::query_as::<_, MealPlanItem>(
            "UPDATE meal_plan_items i \
             SET recipe_id = COALESCE($3, recipe_id), \
                 date = COALESCE($4, date), \
                 meal_type = COALESCE($5, meal_type), \
                 servings = COALESCE($6, servings), \
                 notes = COALESCE($7, notes) \
             WHERE i.id = $1 \
               AND EXISTS (SELECT 1 FROM meal_plans p WHERE p.id = i.meal_plan_id AND p.user_id = $2) \
             RETURNING *",
        )
        .bind(id)
        .bind(caller)
        .bind(data.recipe_id)
        .bind(data.date)
        .bind(data.meal_type)
        .bind(data.servings)
        .bind(&data.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update plan item", e))?
        .ok_or_else(|| AppError::not_found(format!("Plan item {id} not found")))
    }

    /// Remove an item from a plan the caller owns.
    pub async fn delete(&self, caller: Uuid, id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "DELETE FROM meal_plan_items i \
             WHERE i.id = $1 \
               AND EXISTS (SELECT 1 FROM meal_plans p WHERE p.id = i.meal_plan_id AND p.user_id = $2)",
        )
        .bind(id)
        .bind(caller)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete plan item", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Plan item {id} not found")));
        }
        Ok(())
    }
}
