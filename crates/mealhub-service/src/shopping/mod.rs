//! Shopping list domain services.

pub mod items;
pub mod service;

pub use items::ShoppingListItemService;
pub use service::ShoppingListService;
