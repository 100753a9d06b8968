//! Site setting entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Maximum length of a setting key.
pub const MAX_KEY_LENGTH: usize = 255;

/// Settings present on a fresh installation.
pub const DEFAULT_SETTINGS: &[(&str, &str)] = &[
    ("site_title", "Ragnarok Online | Official Server"),
    ("welcome_title", "Welcome to Ragnarok Online"),
    (
        "welcome_subtitle",
        "Join an epic adventure in the mysterious world of Midgard",
    ),
    ("server_ip", "localhost"),
    ("login_port", "6900"),
    ("char_port", "6121"),
    ("map_port", "5121"),
    ("server_status", "online"),
    ("max_players", "1000"),
];

/// A row of the `site_settings` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SiteSetting {
    /// Unique key.
    pub setting_key: String,
    /// Text value.
    pub setting_value: String,
    /// When the value was last written.
    pub updated_at: DateTime<Utc>,
}
