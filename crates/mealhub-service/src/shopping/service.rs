//! Shopping list CRUD, owner-only throughout.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mealhub_auth::policy::{Operation, PolicyGate, ProtectedTable};
use mealhub_core::error::AppError;
use mealhub_core::types::pagination::{PageRequest, PageResponse};
use mealhub_database::repositories::shopping_list::ShoppingListRepository;
use mealhub_entity::shopping::{CreateShoppingList, ShoppingList, UpdateShoppingList};

use crate::context::RequestContext;

/// Manages shopping list CRUD operations.
#[derive(Debug, Clone)]
pub struct ShoppingListService {
    /// Shopping list repository.
    repo: Arc<ShoppingListRepository>,
    /// Policy gate.
    gate: PolicyGate,
}

impl ShoppingListService {
    /// Creates a new shopping list service.
    pub fn new(repo: Arc<ShoppingListRepository>) -> Self {
        Self {
            repo,
            gate: PolicyGate::new(),
        }
    }

    /// Fetch one of the caller's shopping lists.
    pub async fn get_list(&self, ctx: &RequestContext, id: Uuid) -> Result<ShoppingList, AppError> {
        self.gate
            .authorize(ProtectedTable::ShoppingLists, Operation::Select)?;
        self.repo
            .find_by_id(ctx.user_id, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Shopping list {id} not found")))
    }

    /// List the caller's shopping lists.
    pub async fn list_lists(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<ShoppingList>, AppError> {
        self.gate
            .authorize(ProtectedTable::ShoppingLists, Operation::Select)?;
        self.repo.find_all(ctx.user_id, &page).await
    }

    /// Create a shopping list. The payload's owner must be the caller.
    pub async fn create_list(
        &self,
        ctx: &RequestContext,
        data: CreateShoppingList,
    ) -> Result<ShoppingList, AppError> {
        self.gate
            .authorize(ProtectedTable::ShoppingLists, Operation::Insert)?;

        if data.title.trim().is_empty() {
            return Err(AppError::validation("Shopping list title cannot be empty"));
        }

        let list = self.repo.create(ctx.user_id, &data).await?;

        info!(user_id = %ctx.user_id, list_id = %list.id, "Shopping list created");

        Ok(list)
    }

    /// Partially update a shopping list the caller owns.
    pub async fn update_list(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateShoppingList,
    ) -> Result<ShoppingList, AppError> {
        self.gate
            .authorize(ProtectedTable::ShoppingLists, Operation::Update)?;

        if let Some(title) = &data.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("Shopping list title cannot be empty"));
            }
        }

        let list = self.repo.update(ctx.user_id, id, &data).await?;

        info!(user_id = %ctx.user_id, list_id = %id, "Shopping list updated");

        Ok(list)
    }

    /// Delete a shopping list the caller owns, cascading its items.
    pub async fn delete_list(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.gate
            .authorize(ProtectedTable::ShoppingLists, Operation::Delete)?;

        self.repo.delete(ctx.user_id, id).await?;

        info!(user_id = %ctx.user_id, list_id = %id, "Shopping list deleted");

        Ok(())
    }
}
