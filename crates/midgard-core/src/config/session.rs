//! Session management configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Longest accepted session lifetime in hours (ten years).
pub const MAX_TTL_HOURS: u64 = 24 * 365 * 10;

/// Where server-side session state is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    /// Process-local cache; sessions are lost on restart.
    #[default]
    Memory,
    /// The `web_sessions` table.
    Database,
}

impl std::fmt::Display for SessionBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionBackend::Memory => write!(f, "memory"),
            SessionBackend::Database => write!(f, "database"),
        }
    }
}

/// Session management configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session store backend.
    #[serde(default)]
    pub backend: SessionBackend,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Absolute session lifetime in hours, counted from creation.
    #[serde(default = "default_ttl")]
    pub ttl_hours: u64,
    /// Set the `Secure` attribute on the session cookie.
    #[serde(default)]
    pub cookie_secure: bool,
    /// Interval between expired-session sweeps in minutes.
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_minutes: u64,
    /// Upper bound on sessions held by the memory backend.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: SessionBackend::default(),
            cookie_name: default_cookie_name(),
            ttl_hours: default_ttl(),
            cookie_secure: false,
            cleanup_interval_minutes: default_cleanup_interval(),
            max_capacity: default_max_capacity(),
        }
    }
}

impl SessionConfig {
    /// Reject lifetimes outside `1..=MAX_TTL_HOURS`.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(1..=MAX_TTL_HOURS).contains(&self.ttl_hours) {
            return Err(AppError::configuration(format!(
                "session.ttl_hours must be between 1 and {MAX_TTL_HOURS}, got {}",
                self.ttl_hours
            )));
        }
        Ok(())
    }

    /// Session lifetime in seconds, bounded by `MAX_TTL_HOURS`.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_hours.min(MAX_TTL_HOURS) * 3600
    }
}

fn default_cookie_name() -> String {
    "midgard_sid".to_string()
}

fn default_ttl() -> u64 {
    24
}

fn default_cleanup_interval() -> u64 {
    15
}

fn default_max_capacity() -> u64 {
    100_000
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_ttl_bounds() {
        assert!(SessionConfig::default().validate().is_ok());

        for ttl_hours in [0, MAX_TTL_HOURS + 1, u64::MAX] {
            let config = SessionConfig {
                ttl_hours,
                ..SessionConfig::default()
            };
            let err = config.validate().unwrap_err();
            assert_eq!(err.kind, ErrorKind::Configuration);
        }
    }

    #[test]
    fn test_ttl_seconds_is_bounded() {
        let config = SessionConfig {
            ttl_hours: u64::MAX,
            ..SessionConfig::default()
        };
        assert_eq!(config.ttl_seconds(), MAX_TTL_HOURS * 3600);
        assert_eq!(SessionConfig::default().ttl_seconds(), 24 * 3600);
    }
}
