//! Scheduled meals inside a plan.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mealhub_auth::policy::{Operation, PolicyGate, ProtectedTable};
use mealhub_core::error::AppError;
use mealhub_database::repositories::meal_plan_item::MealPlanItemRepository;
use mealhub_entity::meal_plan::{CreateMealPlanItem, MealPlanItem, UpdateMealPlanItem};

use crate::context::RequestContext;

/// Manages item rows under meal plans.
#[derive(Debug, Clone)]
pub struct MealPlanItemService {
    /// Plan item repository.
    repo: Arc<MealPlanItemRepository>,
    /// Policy gate.
    gate: PolicyGate,
}

impl MealPlanItemService {
    /// Creates a new plan item service.
    pub fn new(repo: Arc<MealPlanItemRepository>) -> Self {
        Self {
            repo,
            gate: PolicyGate::new(),
        }
    }

    /// List the items of a plan the caller owns.
    pub async fn list_items(
        &self,
        ctx: &RequestContext,
        plan_id: Uuid,
    ) -> Result<Vec<MealPlanItem>, AppError> {
        self.gate
            .authorize(ProtectedTable::MealPlanItems, Operation::Select)?;
        self.repo.find_by_plan(ctx.user_id, plan_id).await
    }

    /// Schedule a meal inside a plan the caller owns.
    pub async fn add_item(
        &self,
        ctx: &RequestContext,
        data: CreateMealPlanItem,
    ) -> Result<MealPlanItem, AppError> {
        self.gate
            .authorize(ProtectedTable::MealPlanItems, Operation::Insert)?;

        if let Some(servings) = data.servings {
            if servings < 1 {
                return Err(AppError::validation("Servings must be at least 1"));
            }
        }

        let item = self.repo.create(ctx.user_id, &data).await?;

        info!(
            user_id = %ctx.user_id,
            plan_id = %data.meal_plan_id,
            item_id = %item.id,
            "Plan item added"
        );

        Ok(item)
    }

    /// Partially update an item of a plan the caller owns.
    pub async fn update_item(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateMealPlanItem,
    ) -> Result<MealPlanItem, AppError> {
        self.gate
            .authorize(ProtectedTable::MealPlanItems, Operation::Update)?;

        if let Some(servings) = data.servings {
            if servings < 1 {
                return Err(AppError::validation("Servings must be at least 1"));
            }
        }

        let item = self.repo.update(ctx.user_id, id, &data).await?;

        info!(user_id = %ctx.user_id, item_id = %id, "Plan item updated");

        Ok(item)
    }

    /// Remove an item from a plan the caller owns.
    pub async fn remove_item(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.gate
            .authorize(ProtectedTable::MealPlanItems, Operation::Delete)?;

        self.repo.delete(ctx.user_id, id).await?;

        info!(user_id = %ctx.user_id, item_id = %id, "Plan item removed");

        Ok(())
    }
}
