//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use mealhub_entity::meal_plan::MealType;
use mealhub_entity::recipe::{Difficulty, RecipeVisibility};

/// Update profile request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New username.
    #[validate(length(min = 1, max = 64))]
    pub username: Option<String>,
    /// New full name.
    pub full_name: Option<String>,
    /// New avatar reference.
    pub avatar_url: Option<String>,
    /// Replacement dietary-preference list.
    pub dietary_preferences: Option<Vec<String>>,
}

/// Recipe listing query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRecipesQuery {
    /// Visibility scope (default: everything the caller may see).
    #[serde(default)]
    pub visibility: RecipeVisibility,
    /// Title substring to search for.
    pub q: Option<String>,
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    25
}

/// Create recipe request. `user_id` must equal the caller's identity.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRecipeRequest {
    /// Owning identity.
    pub user_id: Uuid,
    /// Title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Ordered instruction steps.
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Preparation time in minutes.
    pub prep_time_minutes: Option<i32>,
    /// Cooking time in minutes.
    pub cook_time_minutes: Option<i32>,
    /// Number of servings.
    pub servings: Option<i32>,
    /// Difficulty rating.
    pub difficulty: Option<Difficulty>,
    /// Estimated total cost.
    pub estimated_cost: Option<f64>,
    /// Calories per serving.
    pub calories_per_serving: Option<i32>,
    /// Image reference.
    pub image_url: Option<String>,
    /// Source reference.
    pub source_url: Option<String>,
    /// Public visibility flag.
    #[serde(default)]
    pub is_public: bool,
}

/// Update recipe request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateRecipeRequest {
    /// New title.
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Replacement instruction list.
    pub instructions: Option<Vec<String>>,
    /// New prep time.
    pub prep_time_minutes: Option<i32>,
    /// New cook time.
    pub cook_time_minutes: Option<i32>,
    /// New servings count.
    pub servings: Option<i32>,
    /// New difficulty.
    pub difficulty: Option<Difficulty>,
    /// New estimated cost.
    pub estimated_cost: Option<f64>,
    /// New calories per serving.
    pub calories_per_serving: Option<i32>,
    /// New image reference.
    pub image_url: Option<String>,
    /// New source reference.
    pub source_url: Option<String>,
    /// New visibility flag.
    pub is_public: Option<bool>,
}

/// Add ingredient request (recipe id comes from the path).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateIngredientRequest {
    /// Ingredient name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Quantity.
    pub amount: Option<f64>,
    /// Unit for the quantity.
    pub unit: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Update ingredient request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateIngredientRequest {
    /// New name.
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    /// New quantity.
    pub amount: Option<f64>,
    /// New unit.
    pub unit: Option<String>,
    /// New notes.
    pub notes: Option<String>,
}

/// Attach tag request (recipe id comes from the path).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachTagRequest {
    /// Catalog tag to attach.
    pub tag_id: Uuid,
}

/// Create meal plan request. `user_id` must equal the caller's identity.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMealPlanRequest {
    /// Owning identity.
    pub user_id: Uuid,
    /// Title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// First day of the plan.
    pub start_date: NaiveDate,
    /// Last day of the plan.
    pub end_date: NaiveDate,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Update meal plan request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateMealPlanRequest {
    /// New title.
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    /// New start date.
    pub start_date: Option<NaiveDate>,
    /// New end date.
    pub end_date: Option<NaiveDate>,
    /// New notes.
    pub notes: Option<String>,
}

/// Schedule a meal request (plan id comes from the path).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMealPlanItemRequest {
    /// Referenced recipe.
    pub recipe_id: Uuid,
    /// Scheduled day.
    pub date: NaiveDate,
    /// Which meal of the day.
    pub meal_type: MealType,
    /// Planned servings (defaults to 1 when omitted).
    pub servings: Option<i32>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Update plan item request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMealPlanItemRequest {
    /// New recipe reference.
    pub recipe_id: Option<Uuid>,
    /// New scheduled day.
    pub date: Option<NaiveDate>,
    /// New meal type.
    pub meal_type: Option<MealType>,
    /// New servings count.
    pub servings: Option<i32>,
    /// New notes.
    pub notes: Option<String>,
}

/// Create shopping list request. `user_id` must equal the caller's identity.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateShoppingListRequest {
    /// Owning identity.
    pub user_id: Uuid,
    /// Title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Linked meal plan, if generated from one.
    pub meal_plan_id: Option<Uuid>,
}

/// Update shopping list request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateShoppingListRequest {
    /// New title.
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    /// New linked meal plan.
    pub meal_plan_id: Option<Uuid>,
    /// New completed flag.
    pub is_completed: Option<bool>,
    /// New total cost.
    pub total_cost: Option<f64>,
}

/// Add list item request (list id comes from the path).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateShoppingListItemRequest {
    /// What to buy.
    #[validate(length(min = 1, max = 200))]
    pub ingredient_name: String,
    /// Quantity.
    pub amount: Option<f64>,
    /// Unit for the quantity.
    pub unit: Option<String>,
    /// Store section.
    pub category: Option<String>,
    /// Estimated cost.
    pub estimated_cost: Option<f64>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Update list item request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateShoppingListItemRequest {
    /// New name.
    #[validate(length(min = 1, max = 200))]
    pub ingredient_name: Option<String>,
    /// New quantity.
    pub amount: Option<f64>,
    /// New unit.
    pub unit: Option<String>,
    /// New checked flag.
    pub is_checked: Option<bool>,
    /// New store section.
    pub category: Option<String>,
    /// New estimated cost.
    pub estimated_cost: Option<f64>,
    /// New actual cost.
    pub actual_cost: Option<f64>,
    /// New notes.
    pub notes: Option<String>,
}
