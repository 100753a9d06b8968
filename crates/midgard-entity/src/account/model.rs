//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ban::BanState;
use super::role::AccountRole;
use super::sex::Sex;

/// A row of the `login` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Account identifier assigned by the store.
    pub account_id: i32,
    /// Unique login name.
    pub userid: String,
    /// Password material (digest, adaptive hash, or legacy plaintext).
    #[serde(skip_serializing)]
    pub user_pass: String,
    /// Display sex.
    #[sqlx(try_from = "String")]
    pub sex: Sex,
    /// Unique email address.
    pub email: String,
    /// Site role, decoded from `group_id`.
    #[sqlx(rename = "group_id", try_from = "i16")]
    pub role: AccountRole,
    /// Ban state, decoded from `state`.
    #[sqlx(rename = "state", try_from = "i32")]
    pub ban_state: BanState,
    /// Number of successful logins.
    pub logincount: i32,
    /// Time of the last successful login (or registration).
    pub lastlogin: Option<DateTime<Utc>>,
    /// Address of the last successful login.
    pub last_ip: String,
    /// Number of characters this account may own.
    pub character_slots: i16,
}

impl Account {
    /// Check if this account has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Check if login must be refused.
    pub fn is_banned(&self) -> bool {
        self.ban_state.is_banned()
    }
}

/// Data required to insert a new account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Desired login name.
    pub userid: String,
    /// Hashed password material.
    pub user_pass: String,
    /// Email address.
    pub email: String,
    /// Display sex.
    pub sex: Sex,
    /// Assigned role.
    pub role: AccountRole,
    /// Address the registration came from.
    pub last_ip: String,
    /// Character capacity.
    pub character_slots: i16,
}
