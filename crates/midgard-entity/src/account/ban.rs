//! Account ban state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an account may log in.
///
/// Stored in `login.state`: `0` is active, any positive value is banned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BanState {
    /// The account can log in.
    #[default]
    Active,
    /// Login is rejected regardless of credentials.
    Banned,
}

impl BanState {
    /// Decode a stored `state` value.
    pub fn from_state(code: i32) -> Self {
        if code > 0 { Self::Banned } else { Self::Active }
    }

    /// The `state` value written for this variant.
    pub fn state(&self) -> i32 {
        match self {
            Self::Active => 0,
            Self::Banned => 1,
        }
    }

    /// Check if the account is banned.
    pub fn is_banned(&self) -> bool {
        matches!(self, Self::Banned)
    }

    /// Map the admin toggle onto a state.
    pub fn from_banned(banned: bool) -> Self {
        if banned { Self::Banned } else { Self::Active }
    }
}

impl From<i32> for BanState {
    fn from(code: i32) -> Self {
        Self::from_state(code)
    }
}

impl fmt::Display for BanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Banned => write!(f, "banned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_codes() {
        assert_eq!(BanState::from_state(0), BanState::Active);
        assert_eq!(BanState::from_state(1), BanState::Banned);
        assert_eq!(BanState::from_state(7), BanState::Banned);
        assert_eq!(BanState::Banned.state(), 1);
        assert_eq!(BanState::Active.state(), 0);
    }
}
