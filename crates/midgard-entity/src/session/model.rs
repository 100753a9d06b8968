//! Session entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::account::{Account, AccountRole};

/// The identity a session is created for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// Account identifier.
    pub account_id: i32,
    /// Login name.
    pub userid: String,
    /// Role at the time the session was created.
    pub role: AccountRole,
}

impl From<&Account> for SessionIdentity {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.account_id,
            userid: account.userid.clone(),
            role: account.role,
        }
    }
}

/// A server-side session.
///
/// Sessions have an absolute lifetime counted from creation and are never
/// renewed. The role is captured at creation; later role changes take
/// effect on the next login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Account identifier.
    pub account_id: i32,
    /// Login name.
    pub userid: String,
    /// Role captured at creation.
    #[sqlx(rename = "group_id", try_from = "i16")]
    pub role: AccountRole,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Start a session for `identity` that lives for `ttl`.
    pub fn start(identity: SessionIdentity, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            account_id: identity.account_id,
            userid: identity.userid,
            role: identity.role,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Check whether the session has expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Check whether the session has expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Check if the session belongs to an administrator.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> SessionIdentity {
        SessionIdentity {
            account_id: 2000000,
            userid: "poring".to_string(),
            role: AccountRole::Player,
        }
    }

    #[test]
    fn test_start_sets_absolute_expiry() {
        let session = Session::start(identity(), Duration::hours(24));
        assert_eq!(session.expires_at - session.created_at, Duration::hours(24));
        assert!(!session.is_expired());
        assert!(session.is_expired_at(session.expires_at));
    }

    #[test]
    fn test_zero_ttl_is_expired() {
        let session = Session::start(identity(), Duration::zero());
        assert!(session.is_expired());
    }
}
