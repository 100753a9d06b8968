//! Custom Axum extractors.

pub mod client_ip;
pub mod json;
pub mod pagination;
pub mod session;

pub use client_ip::ClientIp;
pub use json::JsonBody;
pub use pagination::PaginationParams;
pub use session::{AdminUser, MaybeSession, SessionUser};
