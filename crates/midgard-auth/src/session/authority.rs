//! Session lifecycle: create, establish, resolve, destroy.

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, error, info};

use midgard_core::config::SessionConfig;
use midgard_core::result::AppResult;
use midgard_entity::session::{Session, SessionIdentity};

use super::store::SessionStore;
use super::token::SessionToken;

/// Issues and validates server-side sessions.
///
/// A session lives for a fixed TTL from creation and is never extended.
/// Any number of sessions may exist per account.
#[derive(Clone)]
pub struct SessionAuthority {
    store: Arc<dyn SessionStore>,
    ttl: Duration,
}

impl std::fmt::Debug for SessionAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionAuthority")
            .field("backend", &self.store.backend_name())
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl SessionAuthority {
    /// Creates an authority over `store` using the configured TTL.
    pub fn new(store: Arc<dyn SessionStore>, config: &SessionConfig) -> Self {
        Self {
            store,
            ttl: Duration::seconds(config.ttl_seconds() as i64),
        }
    }

    /// Session lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Creates a session for `identity` and returns its token.
    pub async fn create(&self, identity: SessionIdentity) -> AppResult<SessionToken> {
        let token = SessionToken::generate();
        let session = Session::start(identity, self.ttl);

        self.store.insert(&token.store_key(), &session).await?;

        info!(
            account_id = session.account_id,
            role = %session.role,
            "Session created"
        );
        Ok(token)
    }

    /// Replaces the caller's current session (if any) with a new one.
    ///
    /// Used on login and registration so a browser never holds two live
    /// sessions for different identities.
    pub async fn establish(
        &self,
        previous: Option<&SessionToken>,
        identity: SessionIdentity,
    ) -> AppResult<SessionToken> {
        if let Some(previous) = previous {
            self.destroy(previous).await?;
        }
        self.create(identity).await
    }

    /// Looks up the session behind a token.
    ///
    /// Unknown and expired tokens yield `None`. Store failures are logged
    /// and also yield `None`, so the request proceeds unauthenticated.
    pub async fn resolve(&self, token: &SessionToken) -> Option<Session> {
        match self.store.get(&token.store_key()).await {
            Ok(Some(session)) if !session.is_expired() => Some(session),
            Ok(_) => None,
            Err(e) => {
                error!(
                    backend = self.store.backend_name(),
                    error = %e,
                    "Session lookup failed"
                );
                None
            }
        }
    }

    /// Destroys the session behind a token. Destroying an unknown token
    /// succeeds.
    pub async fn destroy(&self, token: &SessionToken) -> AppResult<()> {
        self.store.remove(&token.store_key()).await?;
        debug!("Session destroyed");
        Ok(())
    }

    /// Removes every expired session from the store.
    pub async fn purge_expired(&self) -> AppResult<u64> {
        self.store.purge_expired().await
    }
}
