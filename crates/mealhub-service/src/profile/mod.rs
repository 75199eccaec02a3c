//! Profile domain service.

pub mod service;

pub use service::ProfileService;
