//! Character entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Starting base level of a new character.
pub const DEFAULT_BASE_LEVEL: i16 = 1;
/// Starting job level of a new character.
pub const DEFAULT_JOB_LEVEL: i16 = 1;
/// Starting zeny of a new character.
pub const DEFAULT_ZENY: i32 = 1000;
/// Map a new character starts on.
pub const DEFAULT_MAP: &str = "prontera";
/// Maximum character name length.
pub const MAX_NAME_LENGTH: usize = 30;

/// A row of the `char` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Character {
    /// Character identifier assigned by the store.
    pub char_id: i32,
    /// Owning account.
    pub account_id: i32,
    /// Unique character name.
    pub name: String,
    /// Job class code.
    pub class: i16,
    /// Base level.
    pub base_level: i16,
    /// Job level.
    pub job_level: i16,
    /// Carried zeny.
    pub zeny: i32,
    /// Map the character was last on.
    pub last_map: String,
    /// Whether the character is currently logged into the game.
    pub online: bool,
    /// Last time the character entered the game.
    pub last_login: Option<DateTime<Utc>>,
}

/// Data required to insert a new character.
#[derive(Debug, Clone)]
pub struct NewCharacter {
    /// Owning account.
    pub account_id: i32,
    /// Character name.
    pub name: String,
    /// Job class code.
    pub class: i16,
}

impl NewCharacter {
    /// Build the row as first stored, with starting level, zeny and map.
    pub fn into_character(self, char_id: i32) -> Character {
        Character {
            char_id,
            account_id: self.account_id,
            name: self.name,
            class: self.class,
            base_level: DEFAULT_BASE_LEVEL,
            job_level: DEFAULT_JOB_LEVEL,
            zeny: DEFAULT_ZENY,
            last_map: DEFAULT_MAP.to_string(),
            online: false,
            last_login: None,
        }
    }
}
