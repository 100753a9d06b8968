//! Shared fixtures for service tests.

use std::sync::Arc;

use midgard_auth::password::PasswordHasher;
use midgard_auth::session::{MemorySessionStore, SessionAuthority};
use midgard_core::config::{AuthConfig, SessionConfig};
use midgard_database::memory::MemoryDatabase;
use midgard_database::store::AccountStore;
use midgard_entity::account::{Account, AccountRole, NewAccount, Sex};

use crate::account::AccountService;
use crate::context::RequestContext;

pub(crate) struct Fixture {
    pub db: Arc<MemoryDatabase>,
    pub authority: Arc<SessionAuthority>,
    pub config: AuthConfig,
}

impl Fixture {
    pub fn new() -> Self {
        let session_config = SessionConfig::default();
        Self {
            db: Arc::new(MemoryDatabase::new()),
            authority: Arc::new(SessionAuthority::new(
                Arc::new(MemorySessionStore::new(&session_config)),
                &session_config,
            )),
            config: AuthConfig {
                bcrypt_cost: 4,
                ..AuthConfig::default()
            },
        }
    }

    pub fn account_service(&self) -> AccountService {
        AccountService::new(
            self.db.clone(),
            Arc::new(PasswordHasher::new(&self.config)),
            self.authority.clone(),
            self.config.clone(),
        )
    }

    /// Insert an account with raw password material.
    pub async fn seed_account(&self, userid: &str, user_pass: &str, role: AccountRole) -> Account {
        self.db
            .create(&NewAccount {
                userid: userid.to_string(),
                user_pass: user_pass.to_string(),
                email: format!("{userid}@example.com"),
                sex: Sex::Male,
                role,
                last_ip: "127.0.0.1".to_string(),
                character_slots: 9,
            })
            .await
            .unwrap()
    }

    pub fn context(account: &Account) -> RequestContext {
        RequestContext {
            account_id: account.account_id,
            userid: account.userid.clone(),
            role: account.role,
            ip_address: "127.0.0.1".to_string(),
        }
    }
}
