//! # midgard-service
//!
//! Business logic for Midgard Web. Each service orchestrates the stores,
//! the password hasher and the session authority to implement one group
//! of use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod admin;
pub mod character;
pub mod context;
pub mod profile;

#[cfg(test)]
pub(crate) mod testing;

pub use account::{AccountService, LoginInput, RegisterInput};
pub use admin::{AdminUserService, SiteSettingsService, StatsService};
pub use character::CharacterService;
pub use context::RequestContext;
pub use profile::ProfileService;
