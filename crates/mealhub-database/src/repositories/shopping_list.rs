//! Shopping list repository implementation.
//!
//! Owner-only like meal plans. The optional `meal_plan_id` is a plain
//! reference with no foreign key, so a list survives deletion of the plan
//! it was generated from.

use sqlx::PgPool;
use uuid::Uuid;

use mealhub_core::error::{AppError, ErrorKind};
use mealhub_core::result::AppResult;
use mealhub_core::types::pagination::{PageRequest, PageResponse};
use mealhub_entity::shopping::{CreateShoppingList, ShoppingList, UpdateShoppingList};

/// Repository for shopping list CRUD.
#[derive(Debug, Clone)]
pub struct ShoppingListRepository {
    pool: PgPool,
}

impl ShoppingListRepository {
    /// Create a new shopping list repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find one of the caller's shopping lists by id.
    pub async fn find_by_id(&self, caller: Uuid, id: Uuid) -> AppResult<Option<ShoppingList>> {
        sqlx::query_as::<_, ShoppingList>(
            "SELECT * FROM shopping_lists WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(caller)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find shopping list by id", e)
        })
    }

    /// List the caller's shopping lists, newest first.
    pub async fn find_all(
        &self,
        caller: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ShoppingList>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM shopping_lists WHERE user_id = $1")
                .bind(caller)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count shopping lists", e)
                })?;

        let lists = sqlx::query_as::<_, ShoppingList>(
            "SELECT * FROM shopping_lists WHERE user_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(caller)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list shopping lists", e)
        })?;

        Ok(PageResponse::new(
            lists,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a shopping list owned by the caller.
    pub async fn create(&self, caller: Uuid, data: &CreateShoppingList) -> AppResult<ShoppingList> {
        if data.user_id != caller {
            return Err(AppError::forbidden(
                "Shopping list owner must match the authenticated identity",
            ));
        }

        sqlx::query_as::<_, ShoppingList>(
            "INSERT INTO shopping_lists (user_id, title, meal_plan_id) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.title)
        .bind(data.meal_plan_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create shopping list", e)
        })
    }

    /// Partially update a shopping list the caller owns.
    pub async fn update(
        &self,
        caller: Uuid,
        id: Uuid,
        data: &UpdateShoppingList,
    ) -> AppResult<ShoppingList> {
        sqlx::query_as::<_, ShoppingList>(
            "UPDATE shopping_lists SET title = COALESCE($3, title), \
                                       meal_plan_id = COALESCE($4, meal_plan_id), \
                                       is_completed = COALESCE($5, is_completed), \
                                       total_cost = COALESCE($6, total_cost), \
                                       updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(caller)
        .bind(&data.title)
        .bind(data.meal_plan_id)
        .bind(data.is_completed)
        .bind(data.total_cost)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update shopping list", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Shopping list {id} not found")))
    }

    /// Delete a shopping list the caller owns. Item rows cascade away in
    /// the same transaction.
    pub async fn delete(&self, caller: Uuid, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM shopping_lists WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(caller)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete shopping list", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Shopping list {id} not found")));
        }
        Ok(())
    }
}
