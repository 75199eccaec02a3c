//! Application state shared across all handlers.

use std::sync::Arc;

use mealhub_auth::identity::IdentityVerifier;
use mealhub_core::config::AppConfig;
use mealhub_database::connection::DatabasePool;

use mealhub_database::repositories::meal_plan::MealPlanRepository;
use mealhub_database::repositories::meal_plan_item::MealPlanItemRepository;
use mealhub_database::repositories::profile::ProfileRepository;
use mealhub_database::repositories::recipe::RecipeRepository;
use mealhub_database::repositories::recipe_ingredient::RecipeIngredientRepository;
use mealhub_database::repositories::recipe_tag::RecipeTagRepository;
use mealhub_database::repositories::shopping_list::ShoppingListRepository;
use mealhub_database::repositories::shopping_list_item::ShoppingListItemRepository;
use mealhub_database::repositories::tag::TagRepository;

use mealhub_service::meal_plan::{MealPlanItemService, MealPlanService};
use mealhub_service::profile::ProfileService;
use mealhub_service::recipe::{IngredientService, RecipeService, RecipeTagService};
use mealhub_service::shopping::{ShoppingListItemService, ShoppingListService};
use mealhub_service::tag::TagService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool handle
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// Identity-provider token verifier
    pub verifier: Arc<IdentityVerifier>,

    // ── Services ─────────────────────────────────────────────
    /// Profile service
    pub profile_service: Arc<ProfileService>,
    /// Tag catalog service
    pub tag_service: Arc<TagService>,
    /// Recipe service
    pub recipe_service: Arc<RecipeService>,
    /// Recipe ingredient service
    pub ingredient_service: Arc<IngredientService>,
    /// Recipe tag-link service
    pub recipe_tag_service: Arc<RecipeTagService>,
    /// Meal plan service
    pub meal_plan_service: Arc<MealPlanService>,
    /// Meal plan item service
    pub meal_plan_item_service: Arc<MealPlanItemService>,
    /// Shopping list service
    pub shopping_list_service: Arc<ShoppingListService>,
    /// Shopping list item service
    pub shopping_list_item_service: Arc<ShoppingListItemService>,
}

impl AppState {
    /// Wires repositories and services over a connected pool.
    pub fn new(config: Arc<AppConfig>, db: DatabasePool) -> Self {
        let verifier = Arc::new(IdentityVerifier::new(&config.identity));
        let db_pool = db.pool().clone();

        let profile_repo = Arc::new(ProfileRepository::new(db_pool.clone()));
        let tag_repo = Arc::new(TagRepository::new(db_pool.clone()));
        let recipe_repo = Arc::new(RecipeRepository::new(db_pool.clone()));
        let ingredient_repo = Arc::new(RecipeIngredientRepository::new(db_pool.clone()));
        let recipe_tag_repo = Arc::new(RecipeTagRepository::new(db_pool.clone()));
        let meal_plan_repo = Arc::new(MealPlanRepository::new(db_pool.clone()));
        let meal_plan_item_repo = Arc::new(MealPlanItemRepository::new(db_pool.clone()));
        let shopping_list_repo = Arc::new(ShoppingListRepository::new(db_pool.clone()));
        let shopping_list_item_repo = Arc::new(ShoppingListItemRepository::new(db_pool.clone()));

        Self {
            config,
            db,
            verifier,
            profile_service: Arc::new(ProfileService::new(profile_repo)),
            tag_service: Arc::new(TagService::new(tag_repo)),
            recipe_service: Arc::new(RecipeService::new(recipe_repo)),
            ingredient_service: Arc::new(IngredientService::new(ingredient_repo)),
            recipe_tag_service: Arc::new(RecipeTagService::new(recipe_tag_repo)),
            meal_plan_service: Arc::new(MealPlanService::new(meal_plan_repo)),
            meal_plan_item_service: Arc::new(MealPlanItemService::new(meal_plan_item_repo)),
            shopping_list_service: Arc::new(ShoppingListService::new(shopping_list_repo)),
            shopping_list_item_service: Arc::new(ShoppingListItemService::new(
                shopping_list_item_repo,
            )),
        }
    }
}
