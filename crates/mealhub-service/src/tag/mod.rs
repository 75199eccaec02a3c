//! Tag catalog domain service.

pub mod service;

pub use service::TagService;
