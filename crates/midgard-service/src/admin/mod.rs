//! Administrative operations: accounts, characters, site settings, stats.

pub mod settings;
pub mod stats;
pub mod users;

pub use settings::SiteSettingsService;
pub use stats::{ServerStatus, SiteStats, StatsService};
pub use users::{AdminCharacterInput, AdminUserService};
