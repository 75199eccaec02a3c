//! HTTP handlers, organized by domain.

pub mod health;
pub mod meal_plan;
pub mod profile;
pub mod recipe;
pub mod shopping;
pub mod tag;

use mealhub_core::error::AppError;
use validator::Validate;

/// Run declarative payload validation, folding failures into one message.
pub(crate) fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
