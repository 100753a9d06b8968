//! Access checks applied before protected operations run.

use midgard_core::error::AppError;
use midgard_entity::session::Session;

/// Message for requests without a valid session.
pub const AUTHENTICATION_REQUIRED: &str = "Authentication required";
/// Message for sessions lacking the admin role.
pub const INSUFFICIENT_PRIVILEGES: &str = "Insufficient privileges";

/// Requires a resolved session.
pub fn require_authenticated(session: Option<Session>) -> Result<Session, AppError> {
    session.ok_or_else(|| AppError::authentication(AUTHENTICATION_REQUIRED))
}

/// Requires a resolved session with the admin role.
pub fn require_admin(session: Option<Session>) -> Result<Session, AppError> {
    let session = require_authenticated(session)?;
    if session.is_admin() {
        Ok(session)
    } else {
        Err(AppError::authorization(INSUFFICIENT_PRIVILEGES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use midgard_core::error::ErrorKind;
    use midgard_entity::account::AccountRole;
    use midgard_entity::session::SessionIdentity;

    fn session(role: AccountRole) -> Session {
        Session::start(
            SessionIdentity {
                account_id: 2000000,
                userid: "knight".to_string(),
                role,
            },
            Duration::hours(1),
        )
    }

    #[test]
    fn test_require_authenticated() {
        let err = require_authenticated(None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, AUTHENTICATION_REQUIRED);
        assert!(require_authenticated(Some(session(AccountRole::Player))).is_ok());
    }

    #[test]
    fn test_require_admin() {
        let err = require_admin(None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);

        let err = require_admin(Some(session(AccountRole::Player))).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
        assert_eq!(err.message, INSUFFICIENT_PRIVILEGES);

        let admin = require_admin(Some(session(AccountRole::Admin))).unwrap();
        assert_eq!(admin.role, AccountRole::Admin);
    }
}
