//! Account sex attribute.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use midgard_core::AppError;

/// Display attribute stored in `login.sex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Sex {
    /// Male.
    #[default]
    #[serde(rename = "M")]
    Male,
    /// Female.
    #[serde(rename = "F")]
    Female,
    /// Server account.
    #[serde(rename = "S")]
    Server,
}

impl Sex {
    /// The single-letter storage code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Server => "S",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            "S" => Ok(Self::Server),
            _ => Err(AppError::validation("Sex must be one of M, F or S")),
        }
    }
}

impl TryFrom<String> for Sex {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
