//! Process-local implementations of the store traits.
//!
//! [`MemoryDatabase`] keeps every table behind a single mutex and enforces
//! the same unique keys and identity offsets as the Postgres schema, so
//! services behave identically against either backend.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use midgard_core::error::AppError;
use midgard_core::result::AppResult;
use midgard_core::types::pagination::{PageRequest, PageResponse};
use midgard_entity::account::{Account, BanState, NewAccount};
use midgard_entity::character::{Character, NewCharacter};
use midgard_entity::settings::{DEFAULT_SETTINGS, SiteSetting};

use crate::store::{AccountStore, CharacterStore, HealthProbe, SettingsStore};

/// First id handed out for accounts.
pub const FIRST_ACCOUNT_ID: i32 = 2_000_000;
/// First id handed out for characters.
pub const FIRST_CHAR_ID: i32 = 150_000;

#[derive(Debug)]
struct Tables {
    accounts: BTreeMap<i32, Account>,
    characters: BTreeMap<i32, Character>,
    settings: BTreeMap<String, SiteSetting>,
    next_account_id: i32,
    next_char_id: i32,
}

/// In-memory database implementing every store trait.
#[derive(Debug)]
pub struct MemoryDatabase {
    tables: Mutex<Tables>,
    offline: AtomicBool,
}

impl MemoryDatabase {
    /// Create an empty database with the default site settings.
    pub fn new() -> Self {
        let now = Utc::now();
        let settings = DEFAULT_SETTINGS
            .iter()
            .map(|(key, value)| {
                (
                    key.to_string(),
                    SiteSetting {
                        setting_key: key.to_string(),
                        setting_value: value.to_string(),
                        updated_at: now,
                    },
                )
            })
            .collect();

        Self {
            tables: Mutex::new(Tables {
                accounts: BTreeMap::new(),
                characters: BTreeMap::new(),
                settings,
                next_account_id: FIRST_ACCOUNT_ID,
                next_char_id: FIRST_CHAR_ID,
            }),
            offline: AtomicBool::new(false),
        }
    }

    /// Make every subsequent operation fail as if the server were down.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Mark a character as in game or not.
    pub fn set_online(&self, char_id: i32, online: bool) -> AppResult<bool> {
        let mut tables = self.tables()?;
        Ok(match tables.characters.get_mut(&char_id) {
            Some(character) => {
                character.online = online;
                true
            }
            None => false,
        })
    }

    fn tables(&self) -> AppResult<MutexGuard<'_, Tables>> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::database("Database unavailable"));
        }
        self.tables
            .lock()
            .map_err(|_| AppError::internal("Memory database lock poisoned"))
    }
}

impl Default for MemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for MemoryDatabase {
    async fn find_by_id(&self, account_id: i32) -> AppResult<Option<Account>> {
        Ok(self.tables()?.accounts.get(&account_id).cloned())
    }

    async fn find_by_userid(&self, userid: &str) -> AppResult<Option<Account>> {
        Ok(self
            .tables()?
            .accounts
            .values()
            .find(|a| a.userid == userid)
            .cloned())
    }

    async fn exists_by_userid_or_email(&self, userid: &str, email: &str) -> AppResult<bool> {
        Ok(self
            .tables()?
            .accounts
            .values()
            .any(|a| a.userid == userid || a.email == email))
    }

    async fn email_taken_by_other(&self, email: &str, account_id: i32) -> AppResult<bool> {
        Ok(self
            .tables()?
            .accounts
            .values()
            .any(|a| a.email == email && a.account_id != account_id))
    }

    async fn create(&self, data: &NewAccount) -> AppResult<Account> {
        let mut tables = self.tables()?;
        if tables.accounts.values().any(|a| a.userid == data.userid) {
            return Err(AppError::conflict(format!(
                "User id '{}' already exists",
                data.userid
            )));
        }
        if tables.accounts.values().any(|a| a.email == data.email) {
            return Err(AppError::conflict(format!(
                "Email '{}' already exists",
                data.email
            )));
        }

        let account_id = tables.next_account_id;
        tables.next_account_id += 1;

        let account = Account {
            account_id,
            userid: data.userid.clone(),
            user_pass: data.user_pass.clone(),
            sex: data.sex,
            email: data.email.clone(),
            role: data.role,
            ban_state: BanState::Active,
            logincount: 0,
            lastlogin: Some(Utc::now()),
            last_ip: data.last_ip.clone(),
            character_slots: data.character_slots,
        };
        tables.accounts.insert(account_id, account.clone());
        Ok(account)
    }

    async fn record_login(&self, account_id: i32, ip: &str) -> AppResult<()> {
        if let Some(account) = self.tables()?.accounts.get_mut(&account_id) {
            account.logincount += 1;
            account.lastlogin = Some(Utc::now());
            account.last_ip = ip.to_string();
        }
        Ok(())
    }

    async fn set_ban_state(&self, account_id: i32, state: BanState) -> AppResult<bool> {
        Ok(match self.tables()?.accounts.get_mut(&account_id) {
            Some(account) => {
                account.ban_state = state;
                true
            }
            None => false,
        })
    }

    async fn update_email(&self, account_id: i32, email: &str) -> AppResult<bool> {
        let mut tables = self.tables()?;
        if tables
            .accounts
            .values()
            .any(|a| a.email == email && a.account_id != account_id)
        {
            return Err(AppError::conflict(format!("Email '{email}' already exists")));
        }
        Ok(match tables.accounts.get_mut(&account_id) {
            Some(account) => {
                account.email = email.to_string();
                true
            }
            None => false,
        })
    }

    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Account>> {
        let tables = self.tables()?;
        let items = tables
            .accounts
            .values()
            .rev()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(PageResponse::new(items, page, tables.accounts.len() as u64))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.tables()?.accounts.len() as u64)
    }
}

#[async_trait]
impl CharacterStore for MemoryDatabase {
    async fn list_by_account(&self, account_id: i32) -> AppResult<Vec<Character>> {
        Ok(self
            .tables()?
            .characters
            .values()
            .filter(|c| c.account_id == account_id)
            .cloned()
            .collect())
    }

    async fn count_by_account(&self, account_id: i32) -> AppResult<u64> {
        Ok(self
            .tables()?
            .characters
            .values()
            .filter(|c| c.account_id == account_id)
            .count() as u64)
    }

    async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        Ok(self.tables()?.characters.values().any(|c| c.name == name))
    }

    async fn create(&self, data: &NewCharacter) -> AppResult<Character> {
        let mut tables = self.tables()?;
        if tables.characters.values().any(|c| c.name == data.name) {
            return Err(AppError::conflict(format!(
                "Character \"{}\" already exists",
                data.name
            )));
        }
        if !tables.accounts.contains_key(&data.account_id) {
            return Err(AppError::not_found(format!(
                "Account {} not found",
                data.account_id
            )));
        }

        let char_id = tables.next_char_id;
        tables.next_char_id += 1;

        let character = data.clone().into_character(char_id);
        tables.characters.insert(char_id, character.clone());
        Ok(character)
    }

    async fn delete(&self, char_id: i32) -> AppResult<bool> {
        Ok(self.tables()?.characters.remove(&char_id).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.tables()?.characters.len() as u64)
    }

    async fn count_online(&self) -> AppResult<u64> {
        Ok(self
            .tables()?
            .characters
            .values()
            .filter(|c| c.online)
            .count() as u64)
    }
}

#[async_trait]
impl SettingsStore for MemoryDatabase {
    async fn all(&self) -> AppResult<Vec<SiteSetting>> {
        Ok(self.tables()?.settings.values().cloned().collect())
    }

    async fn upsert(&self, entries: &[(String, String)]) -> AppResult<()> {
        let mut tables = self.tables()?;
        let now = Utc::now();
        for (key, value) in entries {
            tables.settings.insert(
                key.clone(),
                SiteSetting {
                    setting_key: key.clone(),
                    setting_value: value.clone(),
                    updated_at: now,
                },
            );
        }
        Ok(())
    }
}

#[async_trait]
impl HealthProbe for MemoryDatabase {
    async fn ping(&self) -> AppResult<()> {
        self.tables().map(|_| ())
    }
}
