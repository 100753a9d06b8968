//! # midgard-api
//!
//! HTTP API layer for Midgard Web built on Axum.
//!
//! Provides the REST endpoints, cookie-session extractors, middleware
//! (CORS, request logging, timeouts), DTOs and error mapping.

pub mod app;
pub mod cookie;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::{AppState, StoreSet};
