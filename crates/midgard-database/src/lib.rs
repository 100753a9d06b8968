//! # midgard-database
//!
//! PostgreSQL connection management, migrations, and the store traits the
//! services are written against. Each store has a Postgres repository;
//! the `memory` feature adds process-local implementations.

pub mod connection;
#[cfg(feature = "memory")]
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{AccountStore, CharacterStore, HealthProbe, SettingsStore};
