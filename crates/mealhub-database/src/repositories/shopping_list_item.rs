//! Shopping list item repository implementation.
//!
//! Items inherit ownership from the parent list through an existence
//! sub-query per statement. Updates are partial and row-atomic: two
//! callers touching disjoint columns of the same row both land, last
//! write per column wins.

use sqlx::PgPool;
use uuid::Uuid;

use mealhub_core::error::{AppError, ErrorKind};
use mealhub_core::result::AppResult;
use mealhub_entity::shopping::{CreateShoppingListItem, ShoppingListItem, UpdateShoppingListItem};

/// Repository for line items inside a shopping list.
#[derive(Debug, Clone)]
pub struct ShoppingListItemRepository {
    pool: PgPool,
}

impl ShoppingListItemRepository {
    /// Create a new list item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the items of a shopping list the caller owns.
    pub async fn find_by_list(
        &self,
        caller: Uuid,
        list_id: Uuid,
    ) -> AppResult<Vec<ShoppingListItem>> {
        sqlx::query_as::<_, ShoppingListItem>(
            "SELECT i.* FROM shopping_list_items i \
             JOIN shopping_lists l ON l.id = i.shopping_list_id \
             WHERE i.shopping_list_id = $1 AND l.user_id = $2 \
             ORDER BY i.category ASC NULLS LAST, i.ingredient_name ASC",
        )
        .bind(list_id)
        .bind(caller)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list items", e))
    }

    /// Add an item to a shopping list the caller owns.
    pub async fn create(
        &self,
        caller: Uuid,
        data: &CreateShoppingListItem,
    ) -> AppResult<ShoppingListItem> {
        let inserted = sqlx::query_as::<_, ShoppingListItem>(
            "INSERT INTO shopping_list_items \
                 (shopping_list_id, ingredient_name, amount, unit, category, estimated_cost, notes) \
             SELECT $1, $2, $3, $4, $5, $6, $7 \
             WHERE EXISTS (SELECT 1 FROM shopping_lists WHERE id = $1 AND user_id = $8) \
             RETURNING *",
        )
        .bind(data.shopping_list_id)
        .bind(&data.ingredient_name)
        .bind(data.amount)
        .bind(&data.unit)
        .bind(&data.category)
        .bind(data.estimated_cost)
        .bind(&data.notes)
        .bind(caller)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add list item", e))?;

        inserted.ok_or_else(|| {
            AppError::not_found(format!(
                "Shopping list {} not found",
                data.shopping_list_id
            ))
        })
    }

    /// Partially update an item of a shopping list the caller owns.
    pub async fn update(
        &self,
        caller: Uuid,
        id: Uuid,
        data: &UpdateShoppingListItem,
    ) -> AppResult<ShoppingListItem> {
        sqlx::query_as::<_, ShoppingListItem>(
            "UPDATE shopping_list_items i \
             SET ingredient_name = COALESCE($3, ingredient_name), \
                 amount = COALESCE($4, amount), \
                 unit = COALESCE($5, unit), \
                 is_checked = COALESCE($6, is_checked), \
                 category = COALESCE($7, category), \
                 estimated_cost = COALESCE($8, estimated_cost), \
                 actual_cost = COALESCE($9, actual_cost), \
                 notes = COALESCE($10, notes) \
             WHERE i.id = $1 \
               AND EXISTS (SELECT 1 FROM shopping_lists l WHERE l.id = i.shopping_list_id AND l.user_id = $2) \
             RETURNING *",
        )
        .bind(id)
        .bind(caller)
        .bind(&data.ingredient_name)
        .bind(data.amount)
        .bind(&data.unit)
        .bind(data.is_checked)
        .bind(&data.category)
        .bind(data.estimated_cost)
        .bind(data.actual_cost)
        .bind(&data.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update list item", e))?
        .ok_or_else(|| AppError::not_found(format!("List item {id} not found")))
    }

    /// Remove an item from a shopping list the caller owns.
    pub async fn delete(&self, caller: Uuid, id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "DELETE FROM shopping_list_items i \
             WHERE i.id = $1 \
               AND EXISTS (SELECT 1 FROM shopping_lists l WHERE l.id = i.shopping_list_id AND l.user_id = $2)",
        )
        .bind(id)
        .bind(caller)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete list item", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("List item {id} not found")));
        }
        Ok(())
    }
}
