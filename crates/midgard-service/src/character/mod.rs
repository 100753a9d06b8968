//! Character listing and creation.

pub mod name;
pub mod service;

pub use service::CharacterService;
