//! Shopping list and list item handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use mealhub_core::types::pagination::PageResponse;
use mealhub_entity::shopping::{
    CreateShoppingList, CreateShoppingListItem, ShoppingList, ShoppingListItem,
    UpdateShoppingList, UpdateShoppingListItem,
};

use crate::dto::request::{
    CreateShoppingListItemRequest, CreateShoppingListRequest, UpdateShoppingListItemRequest,
    UpdateShoppingListRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::handlers::validate_payload;
use crate::state::AppState;

/// GET /api/shopping-lists
pub async fn list_lists(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<ShoppingList>>>, ApiError> {
    let lists = state
        .shopping_list_service
        .list_lists(&auth, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(lists)))
}

/// GET /api/shopping-lists/{id}
pub async fn get_list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ShoppingList>>, ApiError> {
    let list = state.shopping_list_service.get_list(&auth, id).await?;
    Ok(Json(ApiResponse::ok(list)))
}

/// POST /api/shopping-lists
pub async fn create_list(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateShoppingListRequest>,
) -> Result<Json<ApiResponse<ShoppingList>>, ApiError> {
    validate_payload(&req)?;

    let list = state
        .shopping_list_service
        .create_list(
            &auth,
            CreateShoppingList {
                user_id: req.user_id,
                title: req.title,
                meal_plan_id: req.meal_plan_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(list)))
}

/// PUT /api/shopping-lists/{id}
pub async fn update_list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateShoppingListRequest>,
) -> Result<Json<ApiResponse<ShoppingList>>, ApiError> {
    validate_payload(&req)?;

    let list = state
        .shopping_list_service
        .update_list(
            &auth,
            id,
            UpdateShoppingList {
                title: req.title,
                meal_plan_id: req.meal_plan_id,
                is_completed: req.is_completed,
                total_cost: req.total_cost,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(list)))
}

/// DELETE /api/shopping-lists/{id}
pub async fn delete_list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.shopping_list_service.delete_list(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Shopping list deleted",
    ))))
}

/// GET /api/shopping-lists/{id}/items
pub async fn list_items(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<ShoppingListItem>>>, ApiError> {
    let items = state
        .shopping_list_item_service
        .list_items(&auth, id)
        .await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/shopping-lists/{id}/items
pub async fn add_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateShoppingListItemRequest>,
) -> Result<Json<ApiResponse<ShoppingListItem>>, ApiError> {
    validate_payload(&req)?;

    let item = state
        .shopping_list_item_service
        .add_item(
            &auth,
            CreateShoppingListItem {
                shopping_list_id: id,
                ingredient_name: req.ingredient_name,
                amount: req.amount,
                unit: req.unit,
                category: req.category,
                estimated_cost: req.estimated_cost,
                notes: req.notes,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(item)))
}

/// PUT /api/shopping-list-items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateShoppingListItemRequest>,
) -> Result<Json<ApiResponse<ShoppingListItem>>, ApiError> {
    validate_payload(&req)?;

    let item = state
        .shopping_list_item_service
        .update_item(
            &auth,
            id,
            UpdateShoppingListItem {
                ingredient_name: req.ingredient_name,
                amount: req.amount,
                unit: req.unit,
                is_checked: req.is_checked,
                category: req.category,
                estimated_cost: req.estimated_cost,
                actual_cost: req.actual_cost,
                notes: req.notes,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /api/shopping-list-items/{id}
pub async fn remove_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .shopping_list_item_service
        .remove_item(&auth, id)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "List item removed",
    ))))
}
