//! HTTP API layer for MealHub.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;
