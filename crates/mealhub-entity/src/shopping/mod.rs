//! Shopping list domain entities.

pub mod item;
pub mod list;

pub use item::{CreateShoppingListItem, ShoppingListItem, UpdateShoppingListItem};
pub use list::{CreateShoppingList, ShoppingList, UpdateShoppingList};
