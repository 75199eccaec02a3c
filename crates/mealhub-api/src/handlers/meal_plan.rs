//! Meal plan and plan item handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use mealhub_core::types::pagination::PageResponse;
use mealhub_entity::meal_plan::{
    CreateMealPlan, CreateMealPlanItem, MealPlan, MealPlanItem, UpdateMealPlan, UpdateMealPlanItem,
};

use crate::dto::request::{
    CreateMealPlanItemRequest, CreateMealPlanRequest, UpdateMealPlanItemRequest,
    UpdateMealPlanRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::handlers::validate_payload;
use crate::state::AppState;

/// GET /api/meal-plans
pub async fn list_plans(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<MealPlan>>>, ApiError> {
    let plans = state
        .meal_plan_service
        .list_plans(&auth, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(plans)))
}

/// GET /api/meal-plans/{id}
pub async fn get_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MealPlan>>, ApiError> {
    let plan = state.meal_plan_service.get_plan(&auth, id).await?;
    Ok(Json(ApiResponse::ok(plan)))
}

/// POST /api/meal-plans
pub async fn create_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateMealPlanRequest>,
) -> Result<Json<ApiResponse<MealPlan>>, ApiError> {
    validate_payload(&req)?;

    let plan = state
        .meal_plan_service
        .create_plan(
            &auth,
            CreateMealPlan {
                user_id: req.user_id,
                title: req.title,
                start_date: req.start_date,
                end_date: req.end_date,
                notes: req.notes,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(plan)))
}

/// PUT /api/meal-plans/{id}
pub async fn update_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMealPlanRequest>,
) -> Result<Json<ApiResponse<MealPlan>>, ApiError> {
    validate_payload(&req)?;

    let plan = state
        .meal_plan_service
        .update_plan(
            &auth,
            id,
            UpdateMealPlan {
                title: req.title,
                start_date: req.start_date,
                end_date: req.end_date,
                notes: req.notes,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(plan)))
}

/// DELETE /api/meal-plans/{id}
pub async fn delete_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.meal_plan_service.delete_plan(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Meal plan deleted",
    ))))
}

/// GET /api/meal-plans/{id}/items
pub async fn list_items(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<MealPlanItem>>>, ApiError> {
    let items = state.meal_plan_item_service.list_items(&auth, id).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/meal-plans/{id}/items
pub async fn add_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateMealPlanItemRequest>,
) -> Result<Json<ApiResponse<MealPlanItem>>, ApiError> {
    let item = state
        .meal_plan_item_service
        .add_item(
            &auth,
            CreateMealPlanItem {
                meal_plan_id: id,
                recipe_id: req.recipe_id,
                date: req.date,
                meal_type: req.meal_type,
                servings: req.servings,
                notes: req.notes,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(item)))
}

/// PUT /api/meal-plan-items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMealPlanItemRequest>,
) -> Result<Json<ApiResponse<MealPlanItem>>, ApiError> {
    let item = state
        .meal_plan_item_service
        .update_item(
            &auth,
            id,
            UpdateMealPlanItem {
                recipe_id: req.recipe_id,
                date: req.date,
                meal_type: req.meal_type,
                servings: req.servings,
                notes: req.notes,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /api/meal-plan-items/{id}
pub async fn remove_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.meal_plan_item_service.remove_item(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Plan item removed",
    ))))
}
