//! Line items inside a shopping list.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mealhub_auth::policy::{Operation, PolicyGate, ProtectedTable};
use mealhub_core::error::AppError;
use mealhub_database::repositories::shopping_list_item::ShoppingListItemRepository;
use mealhub_entity::shopping::{CreateShoppingListItem, ShoppingListItem, UpdateShoppingListItem};

use crate::context::RequestContext;

/// Manages item rows under shopping lists.
#[derive(Debug, Clone)]
pub struct ShoppingListItemService {
    /// List item repository.
    repo: Arc<ShoppingListItemRepository>,
    /// Policy gate.
    gate: PolicyGate,
}

impl ShoppingListItemService {
    /// Creates a new list item service.
    pub fn new(repo: Arc<ShoppingListItemRepository>) -> Self {
        Self {
            repo,
            gate: PolicyGate::new(),
        }
    }

    /// List the items of a shopping list the caller owns.
    pub async fn list_items(
        &self,
        ctx: &RequestContext,
        list_id: Uuid,
    ) -> Result<Vec<ShoppingListItem>, AppError> {
        self.gate
            .authorize(ProtectedTable::ShoppingListItems, Operation::Select)?;
        self.repo.find_by_list(ctx.user_id, list_id).await
    }

    /// Add an item to a shopping list the caller owns.
    pub async fn add_item(
        &self,
        ctx: &RequestContext,
        data: CreateShoppingListItem,
    ) -> Result<ShoppingListItem, AppError> {
        self.gate
            .authorize(ProtectedTable::ShoppingListItems, Operation::Insert)?;

        if data.ingredient_name.trim().is_empty() {
            return Err(AppError::validation("Ingredient name cannot be empty"));
        }

        let item = self.repo.create(ctx.user_id, &data).await?;

        info!(
            user_id = %ctx.user_id,
            list_id = %data.shopping_list_id,
            item_id = %item.id,
            "List item added"
        );

        Ok(item)
    }

    /// Partially update an item of a shopping list the caller owns.
    ///
    /// Updates are column-wise: concurrent writers touching disjoint
    /// fields both land, and the row never mixes torn values.
    pub async fn update_item(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateShoppingListItem,
    ) -> Result<ShoppingListItem, AppError> {
        self.gate
            .authorize(ProtectedTable::ShoppingListItems, Operation::Update)?;

        if let Some(name) = &data.ingredient_name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Ingredient name cannot be empty"));
            }
        }

        let item = self.repo.update(ctx.user_id, id, &data).await?;

        info!(user_id = %ctx.user_id, item_id = %id, "List item updated");

        Ok(item)
    }

    /// Remove an item from a shopping list the caller owns.
    pub async fn remove_item(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.gate
            .authorize(ProtectedTable::ShoppingListItems, Operation::Delete)?;

        self.repo.delete(ctx.user_id, id).await?;

        info!(user_id = %ctx.user_id, item_id = %id, "List item removed");

        Ok(())
    }
}
