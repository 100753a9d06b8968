//! Admin-only handlers.

pub mod characters;
pub mod settings;
pub mod stats;
pub mod users;
