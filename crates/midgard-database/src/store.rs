//! Store traits over the persisted tables.
//!
//! Uniqueness is enforced by the store: inserts and updates that would
//! duplicate a unique column fail with an [`ErrorKind::Conflict`] error.
//!
//! [`ErrorKind::Conflict`]: midgard_core::error::ErrorKind::Conflict

use async_trait::async_trait;

use midgard_core::result::AppResult;
use midgard_core::types::pagination::{PageRequest, PageResponse};
use midgard_entity::account::{Account, BanState, NewAccount};
use midgard_entity::character::{Character, NewCharacter};
use midgard_entity::settings::SiteSetting;

/// Access to the `login` table.
#[async_trait]
pub trait AccountStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find an account by id.
    async fn find_by_id(&self, account_id: i32) -> AppResult<Option<Account>>;

    /// Find an account by exact user id.
    async fn find_by_userid(&self, userid: &str) -> AppResult<Option<Account>>;

    /// Check whether any account uses `userid` or `email`.
    async fn exists_by_userid_or_email(&self, userid: &str, email: &str) -> AppResult<bool>;

    /// Check whether an account other than `account_id` uses `email`.
    async fn email_taken_by_other(&self, email: &str, account_id: i32) -> AppResult<bool>;

    /// Insert a new account with zero logins and the current time as
    /// last login.
    async fn create(&self, data: &NewAccount) -> AppResult<Account>;

    /// Increment the login count and record time and address.
    async fn record_login(&self, account_id: i32, ip: &str) -> AppResult<()>;

    /// Set the ban state. Returns `false` when the account does not exist.
    async fn set_ban_state(&self, account_id: i32, state: BanState) -> AppResult<bool>;

    /// Change the email. Returns `false` when the account does not exist.
    async fn update_email(&self, account_id: i32, email: &str) -> AppResult<bool>;

    /// List accounts, newest first.
    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Account>>;

    /// Count all accounts.
    async fn count(&self) -> AppResult<u64>;
}

/// Access to the `char` table.
#[async_trait]
pub trait CharacterStore: Send + Sync + std::fmt::Debug + 'static {
    /// Characters of an account ordered by id.
    async fn list_by_account(&self, account_id: i32) -> AppResult<Vec<Character>>;

    /// Number of characters an account owns.
    async fn count_by_account(&self, account_id: i32) -> AppResult<u64>;

    /// Check whether a character name is taken.
    async fn exists_by_name(&self, name: &str) -> AppResult<bool>;

    /// Insert a new character with starting level, zeny and map.
    async fn create(&self, data: &NewCharacter) -> AppResult<Character>;

    /// Delete a character. Returns `false` when it does not exist.
    async fn delete(&self, char_id: i32) -> AppResult<bool>;

    /// Count all characters.
    async fn count(&self) -> AppResult<u64>;

    /// Count characters currently in game.
    async fn count_online(&self) -> AppResult<u64>;
}

/// Access to the `site_settings` table.
#[async_trait]
pub trait SettingsStore: Send + Sync + std::fmt::Debug + 'static {
    /// All settings ordered by key.
    async fn all(&self) -> AppResult<Vec<SiteSetting>>;

    /// Insert or overwrite each key, all or nothing.
    async fn upsert(&self, entries: &[(String, String)]) -> AppResult<()>;
}

/// Connectivity check used by the health endpoint.
#[async_trait]
pub trait HealthProbe: Send + Sync + std::fmt::Debug + 'static {
    /// Succeeds when the backing store answers.
    async fn ping(&self) -> AppResult<()>;
}
