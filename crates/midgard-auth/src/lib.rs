//! # midgard-auth
//!
//! Authentication and authorization for Midgard Web.
//!
//! ## Modules
//!
//! - `password`: legacy-compatible password verification and hashing
//! - `session`: server-side sessions behind opaque cookie tokens
//! - `guard`: authenticated and admin-only access checks

pub mod guard;
pub mod password;
pub mod session;

pub use guard::{require_admin, require_authenticated};
pub use password::{PasswordHasher, verify_password};
pub use session::{SessionAuthority, SessionCleanup, SessionStore, SessionToken};
