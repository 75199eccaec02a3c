//! Route definitions for the MealHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(profile_routes())
        .merge(tag_routes())
        .merge(recipe_routes())
        .merge(meal_plan_routes())
        .merge(shopping_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Profile self-service endpoints.
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profiles/me", get(handlers::profile::get_profile))
        .route("/profiles/me", put(handlers::profile::update_profile))
}

/// Shared tag catalog endpoints.
fn tag_routes() -> Router<AppState> {
    Router::new()
        .route("/tags", get(handlers::tag::list_tags))
        .route("/tags", post(handlers::tag::create_tag))
        .route("/tags/{id}", get(handlers::tag::get_tag))
        .route("/tags/{id}", put(handlers::tag::update_tag))
        .route("/tags/{id}", delete(handlers::tag::delete_tag))
}

/// Recipe CRUD plus nested ingredients and tag links.
fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(handlers::recipe::list_recipes))
        .route("/recipes", post(handlers::recipe::create_recipe))
        .route("/recipes/{id}", get(handlers::recipe::get_recipe))
        .route("/recipes/{id}", put(handlers::recipe::update_recipe))
        .route("/recipes/{id}", delete(handlers::recipe::delete_recipe))
        .route(
            "/recipes/{id}/ingredients",
            get(handlers::recipe::list_ingredients),
        )
        .route(
            "/recipes/{id}/ingredients",
            post(handlers::recipe::add_ingredient),
        )
        .route(
            "/ingredients/{id}",
            put(handlers::recipe::update_ingredient),
        )
        .route(
            "/ingredients/{id}",
            delete(handlers::recipe::remove_ingredient),
        )
        .route("/recipes/{id}/tags", get(handlers::recipe::list_recipe_tags))
        .route("/recipes/{id}/tags", post(handlers::recipe::attach_tag))
        .route(
            "/recipes/{id}/tags/{tag_id}",
            delete(handlers::recipe::detach_tag),
        )
}

/// Meal plan CRUD plus nested items.
fn meal_plan_routes() -> Router<AppState> {
    Router::new()
        .route("/meal-plans", get(handlers::meal_plan::list_plans))
        .route("/meal-plans", post(handlers::meal_plan::create_plan))
        .route("/meal-plans/{id}", get(handlers::meal_plan::get_plan))
        .route("/meal-plans/{id}", put(handlers::meal_plan::update_plan))
        .route("/meal-plans/{id}", delete(handlers::meal_plan::delete_plan))
        .route(
            "/meal-plans/{id}/items",
            get(handlers::meal_plan::list_items),
        )
        .route(
            "/meal-plans/{id}/items",
            post(handlers::meal_plan::add_item),
        )
        .route(
            "/meal-plan-items/{id}",
            put(handlers::meal_plan::update_item),
        )
        .route(
            "/meal-plan-items/{id}",
            delete(handlers::meal_plan::remove_item),
        )
}

/// Shopping list CRUD plus nested items.
fn shopping_routes() -> Router<AppState> {
    Router::new()
        .route("/shopping-lists", get(handlers::shopping::list_lists))
        .route("/shopping-lists", post(handlers::shopping::create_list))
        .route("/shopping-lists/{id}", get(handlers::shopping::get_list))
        .route("/shopping-lists/{id}", put(handlers::shopping::update_list))
        .route(
            "/shopping-lists/{id}",
            delete(handlers::shopping::delete_list),
        )
        .route(
            "/shopping-lists/{id}/items",
            get(handlers::shopping::list_items),
        )
        .route(
            "/shopping-lists/{id}/items",
            post(handlers::shopping::add_item),
        )
        .route(
            "/shopping-list-items/{id}",
            put(handlers::shopping::update_item),
        )
        .route(
            "/shopping-list-items/{id}",
            delete(handlers::shopping::remove_item),
        )
}

/// Health endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
