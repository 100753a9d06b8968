//! PostgreSQL repository implementations.

pub mod account;
pub mod character;
pub mod session;
pub mod settings;

pub use account::AccountRepository;
pub use character::CharacterRepository;
pub use session::SessionRepository;
pub use settings::SettingsRepository;
