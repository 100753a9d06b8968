//! Request context carrying the authenticated account.

use midgard_core::error::AppError;
use midgard_entity::account::AccountRole;
use midgard_entity::session::Session;

/// Context for the current authenticated request.
///
/// Built by the HTTP layer from the resolved session so every operation
/// knows *who* is acting and from *where*.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated account.
    pub account_id: i32,
    /// Login name from the session.
    pub userid: String,
    /// Role captured when the session was created.
    pub role: AccountRole,
    /// Client address of the request.
    pub ip_address: String,
}

impl RequestContext {
    /// Creates a context from a resolved session.
    pub fn from_session(session: &Session, ip_address: impl Into<String>) -> Self {
        Self {
            account_id: session.account_id,
            userid: session.userid.clone(),
            role: session.role,
            ip_address: ip_address.into(),
        }
    }

    /// Returns whether the current account is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Fails with `Authorization` unless the account is an admin.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::authorization(
                midgard_auth::guard::INSUFFICIENT_PRIVILEGES,
            ))
        }
    }
}
