//! Tag catalog domain entities.

pub mod model;
pub mod tag_type;

pub use model::Tag;
pub use tag_type::TagType;
