//! Recipe, ingredient, and tag-link handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use mealhub_core::types::pagination::PageResponse;
use mealhub_entity::recipe::{
    CreateRecipe, CreateRecipeIngredient, Recipe, RecipeIngredient, UpdateRecipe,
    UpdateRecipeIngredient,
};
use mealhub_entity::tag::Tag;

use crate::dto::request::{
    AttachTagRequest, CreateIngredientRequest, CreateRecipeRequest, ListRecipesQuery,
    UpdateIngredientRequest, UpdateRecipeRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::handlers::validate_payload;
use crate::state::AppState;

/// GET /api/recipes
pub async fn list_recipes(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListRecipesQuery>,
) -> Result<Json<ApiResponse<PageResponse<Recipe>>>, ApiError> {
    let page = PaginationParams {
        page: query.page,
        per_page: query.per_page,
    }
    .into_page_request();

    let recipes = state
        .recipe_service
        .list_recipes(&auth, query.visibility, query.q.as_deref(), page)
        .await?;

    Ok(Json(ApiResponse::ok(recipes)))
}

/// GET /api/recipes/{id}
pub async fn get_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Recipe>>, ApiError> {
    let recipe = state.recipe_service.get_recipe(&auth, id).await?;
    Ok(Json(ApiResponse::ok(recipe)))
}

/// POST /api/recipes
pub async fn create_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateRecipeRequest>,
) -> Result<Json<ApiResponse<Recipe>>, ApiError> {
    validate_payload(&req)?;

    let recipe = state
        .recipe_service
        .create_recipe(
            &auth,
            CreateRecipe {
                user_id: req.user_id,
                title: req.title,
                description: req.description,
                instructions: req.instructions,
                prep_time_minutes: req.prep_time_minutes,
                cook_time_minutes: req.cook_time_minutes,
                servings: req.servings,
                difficulty: req.difficulty,
                estimated_cost: req.estimated_cost,
                calories_per_serving: req.calories_per_serving,
                image_url: req.image_url,
                source_url: req.source_url,
                is_public: req.is_public,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(recipe)))
}

/// PUT /api/recipes/{id}
pub async fn update_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRecipeRequest>,
) -> Result<Json<ApiResponse<Recipe>>, ApiError> {
    validate_payload(&req)?;

    let recipe = state
        .recipe_service
        .update_recipe(
            &auth,
            id,
            UpdateRecipe {
                title: req.title,
                description: req.description,
                instructions: req.instructions,
                prep_time_minutes: req.prep_time_minutes,
                cook_time_minutes: req.cook_time_minutes,
                servings: req.servings,
                difficulty: req.difficulty,
                estimated_cost: req.estimated_cost,
                calories_per_serving: req.calories_per_serving,
                image_url: req.image_url,
                source_url: req.source_url,
                is_public: req.is_public,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(recipe)))
}

/// DELETE /api/recipes/{id}
pub async fn delete_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.recipe_service.delete_recipe(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Recipe deleted"))))
}

/// GET /api/recipes/{id}/ingredients
pub async fn list_ingredients(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<RecipeIngredient>>>, ApiError> {
    let ingredients = state.ingredient_service.list_ingredients(&auth, id).await?;
    Ok(Json(ApiResponse::ok(ingredients)))
}

/// POST /api/recipes/{id}/ingredients
pub async fn add_ingredient(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateIngredientRequest>,
) -> Result<Json<ApiResponse<RecipeIngredient>>, ApiError> {
    validate_payload(&req)?;

    let ingredient = state
        .ingredient_service
        .add_ingredient(
            &auth,
            CreateRecipeIngredient {
                recipe_id: id,
                name: req.name,
                amount: req.amount,
                unit: req.unit,
                notes: req.notes,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(ingredient)))
}

/// PUT /api/ingredients/{id}
pub async fn update_ingredient(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateIngredientRequest>,
) -> Result<Json<ApiResponse<RecipeIngredient>>, ApiError> {
    validate_payload(&req)?;

    let ingredient = state
        .ingredient_service
        .update_ingredient(
            &auth,
            id,
            UpdateRecipeIngredient {
                name: req.name,
                amount: req.amount,
                unit: req.unit,
                notes: req.notes,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(ingredient)))
}

/// DELETE /api/ingredients/{id}
pub async fn remove_ingredient(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.ingredient_service.remove_ingredient(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Ingredient removed",
    ))))
}

/// GET /api/recipes/{id}/tags
pub async fn list_recipe_tags(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Tag>>>, ApiError> {
    let tags = state.recipe_tag_service.list_recipe_tags(&auth, id).await?;
    Ok(Json(ApiResponse::ok(tags)))
}

/// POST /api/recipes/{id}/tags
pub async fn attach_tag(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<AttachTagRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .recipe_tag_service
        .attach_tag(&auth, id, req.tag_id)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Tag attached"))))
}

/// DELETE /api/recipes/{id}/tags/{tag_id}
pub async fn detach_tag(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, tag_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .recipe_tag_service
        .detach_tag(&auth, id, tag_id)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Tag detached"))))
}
