//! Core type definitions used across the Midgard workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
