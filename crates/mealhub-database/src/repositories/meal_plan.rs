//! Meal plan repository implementation.
//!
//! Meal plans have no public state: every operation is owner-only, so a
//! row that exists but belongs to someone else is reported as NotFound —
//! a denial must not reveal that the row exists.

use sqlx::PgPool;
use uuid::Uuid;

use mealhub_core::error::{AppError, ErrorKind};
use mealhub_core::result::AppResult;
use mealhub_core::types::pagination::{PageRequest, PageResponse};
use mealhub_entity::meal_plan::{CreateMealPlan, MealPlan, UpdateMealPlan};

/// Repository for meal plan CRUD.
#[derive(Debug, Clone)]
pub struct MealPlanRepository {
    pool: PgPool,
}

impl MealPlanRepository {
    /// Create a new meal plan repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find one of the caller's meal plans by id.
    pub async fn find_by_id(&self, caller: Uuid, id: Uuid) -> AppResult<Option<MealPlan>> {
        sqlx::query_as::<_, MealPlan>("SELECT * FROM meal_plans WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(caller)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find meal plan by id", e)
            })
    }

    /// List the caller's meal plans, newest first.
    pub async fn find_all(
        &self,
        caller: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<MealPlan>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM meal_plans WHERE user_id = $1")
            .bind(caller)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count meal plans", e)
            })?;

        let plans = sqlx::query_as::<_, MealPlan>(
            "SELECT * FROM meal_plans WHERE user_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(caller)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list meal plans", e))?;

        Ok(PageResponse::new(
            plans,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a meal plan owned by the caller.
    pub async fn create(&self, caller: Uuid, data: &CreateMealPlan) -> AppResult<MealPlan> {
        if data.user_id != caller {
            return Err(AppError::forbidden(
                "Meal plan owner must match the authenticated identity",
            ));
        }

        sqlx::query_as::<_, MealPlan>(
            "INSERT INTO meal_plans (user_id, title, start_date, end_date, notes) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.title)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create meal plan", e))
    }

    /// Partially update a meal plan the caller owns.
    pub async fn update(
        &self,
        caller: Uuid,
        id: Uuid,
        data: &UpdateMealPlan,
    ) -> AppResult<MealPlan> {
        sqlx::query_as::<_, MealPlan>(
            "UPDATE meal_plans SET title = COALESCE($3, title), \
                                   start_date = COALESCE($4, start_date), \
                                   end_date = COALESCE($5, end_date), \
                                   notes = COALESCE($6, notes), \
                                   updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(caller)
        .bind(&data.title)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(&data.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update meal plan", e))?
        .ok_or_else(|| AppError::not_found(format!("Meal plan {id} not found")))
    }

    /// Delete a meal plan the caller owns. Item rows cascade away in the
    /// same transaction.
    pub async fn delete(&self, caller: Uuid, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM meal_plans WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(caller)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete meal plan", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Meal plan {id} not found")));
        }
        Ok(())
    }
}
