//! Server-side sessions: token issuance, storage backends, and expiry.

pub mod authority;
pub mod cleanup;
pub mod database;
pub mod memory;
pub mod store;
pub mod token;

pub use authority::SessionAuthority;
pub use cleanup::SessionCleanup;
pub use database::DatabaseSessionStore;
pub use memory::MemorySessionStore;
pub use store::SessionStore;
pub use token::SessionToken;
