//! Meal plan CRUD, owner-only throughout.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mealhub_auth::policy::{Operation, PolicyGate, ProtectedTable};
use mealhub_core::error::AppError;
use mealhub_core::types::pagination::{PageRequest, PageResponse};
use mealhub_database::repositories::meal_plan::MealPlanRepository;
use mealhub_entity::meal_plan::{CreateMealPlan, MealPlan, UpdateMealPlan};

use crate::context::RequestContext;

/// Manages meal plan CRUD operations.
#[derive(Debug, Clone)]
pub struct MealPlanService {
    /// Meal plan repository.
    repo: Arc<MealPlanRepository>,
    /// Policy gate.
    gate: PolicyGate,
}

impl MealPlanService {
    /// Creates a new meal plan service.
    pub fn new(repo: Arc<MealPlanRepository>) -> Self {
        Self {
            repo,
            gate: PolicyGate::new(),
        }
    }

    /// Fetch one of the caller's meal plans.
    pub async fn get_plan(&self, ctx: &RequestContext, id: Uuid) -> Result<MealPlan, AppError> {
        self.gate
            .authorize(ProtectedTable::MealPlans, Operation::Select)?;
        self.repo
            .find_by_id(ctx.user_id, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Meal plan {id} not found")))
    }

    /// List the caller's meal plans.
    pub async fn list_plans(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<MealPlan>, AppError> {
        self.gate
            .authorize(ProtectedTable::MealPlans, Operation::Select)?;
        self.repo.find_all(ctx.user_id, &page).await
    }

    /// Create a meal plan. The payload's owner must be the caller.
    pub async fn create_plan(
        &self,
        ctx: &RequestContext,
        data: CreateMealPlan,
    ) -> Result<MealPlan, AppError> {
        self.gate
            .authorize(ProtectedTable::MealPlans, Operation::Insert)?;

        if data.title.trim().is_empty() {
            return Err(AppError::validation("Meal plan title cannot be empty"));
        }

        let plan = self.repo.create(ctx.user_id, &data).await?;

        info!(user_id = %ctx.user_id, plan_id = %plan.id, "Meal plan created");

        Ok(plan)
    }

    /// Partially update a meal plan the caller owns.
    pub async fn update_plan(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateMealPlan,
    ) -> Result<MealPlan, AppError> {
        self.gate
            .authorize(ProtectedTable::MealPlans, Operation::Update)?;

        if let Some(title) = &data.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("Meal plan title cannot be empty"));
            }
        }

        let plan = self.repo.update(ctx.user_id, id, &data).await?;

        info!(user_id = %ctx.user_id, plan_id = %id, "Meal plan updated");

        Ok(plan)
    }

    /// Delete a meal plan the caller owns, cascading its items.
    pub async fn delete_plan(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.gate
            .authorize(ProtectedTable::MealPlans, Operation::Delete)?;

        self.repo.delete(ctx.user_id, id).await?;

        info!(user_id = %ctx.user_id, plan_id = %id, "Meal plan deleted");

        Ok(())
    }
}
