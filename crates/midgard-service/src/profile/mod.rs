//! Self-service profile operations.

pub mod service;

pub use service::ProfileService;
