//! Account role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage code of the administrator group.
pub const ADMIN_GROUP_ID: i16 = 99;
/// Storage code of the default player group.
pub const PLAYER_GROUP_ID: i16 = 0;

/// Roles recognized by the web site.
///
/// Stored in `login.group_id`; every code other than [`ADMIN_GROUP_ID`]
/// decodes as [`AccountRole::Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    /// Regular player account.
    #[default]
    Player,
    /// Site administrator.
    Admin,
}

impl AccountRole {
    /// Decode a stored `group_id`.
    pub fn from_group_id(code: i16) -> Self {
        if code == ADMIN_GROUP_ID {
            Self::Admin
        } else {
            Self::Player
        }
    }

    /// The `group_id` written for this role.
    pub fn group_id(&self) -> i16 {
        match self {
            Self::Admin => ADMIN_GROUP_ID,
            Self::Player => PLAYER_GROUP_ID,
        }
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Player => "player",
        }
    }

    /// Human-readable account type shown on the profile page.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Player => "Player",
        }
    }
}

impl From<i16> for AccountRole {
    fn from(code: i16) -> Self {
        Self::from_group_id(code)
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
