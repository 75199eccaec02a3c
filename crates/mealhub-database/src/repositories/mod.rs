//! Repository implementations for all MealHub entities.

pub mod meal_plan;
pub mod meal_plan_item;
pub mod profile;
pub mod recipe;
pub mod recipe_ingredient;
pub mod recipe_tag;
pub mod shopping_list;
pub mod shopping_list_item;
pub mod tag;

pub use meal_plan::MealPlanRepository;
pub use meal_plan_item::MealPlanItemRepository;
pub use profile::ProfileRepository;
pub use recipe::RecipeRepository;
pub use recipe_ingredient::RecipeIngredientRepository;
pub use recipe_tag::RecipeTagRepository;
pub use shopping_list::ShoppingListRepository;
pub use shopping_list_item::ShoppingListItemRepository;
pub use tag::TagRepository;
