//! Response DTOs.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use midgard_entity::account::Account;
use midgard_entity::character::Character;
use midgard_entity::session::Session;
use midgard_service::admin::SiteStats;

/// Success flag plus a human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a successful message response.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Account summary returned after registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUser {
    /// Account id.
    pub id: i32,
    /// User id.
    pub username: String,
    /// Email address.
    pub email: String,
}

/// Registration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// The new account.
    pub user: RegisteredUser,
}

/// Account summary returned after login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedInUser {
    /// Account id.
    pub id: i32,
    /// User id.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Raw storage group id.
    pub group_id: i16,
    /// `"admin"` or `"player"`.
    pub role: String,
}

impl From<&Account> for LoggedInUser {
    fn from(account: &Account) -> Self {
        Self {
            id: account.account_id,
            username: account.userid.clone(),
            email: account.email.clone(),
            group_id: account.role.group_id(),
            role: account.role.as_str().to_string(),
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// The logged-in account.
    pub user: LoggedInUser,
}

/// Identity attached to a live session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserView {
    /// Account id.
    pub id: i32,
    /// User id.
    pub username: String,
    /// Raw storage group id.
    pub group_id: i16,
    /// `"admin"` or `"player"`.
    pub role: String,
}

/// Session check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    /// Whether the request carries a live session.
    pub authenticated: bool,
    /// The session identity, when authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUserView>,
}

impl From<Option<Session>> for CheckResponse {
    fn from(session: Option<Session>) -> Self {
        Self {
            authenticated: session.is_some(),
            user: session.map(|s| SessionUserView {
                id: s.account_id,
                username: s.userid,
                group_id: s.role.group_id(),
                role: s.role.as_str().to_string(),
            }),
        }
    }
}

/// Own profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    /// Account id.
    pub account_id: i32,
    /// User id.
    pub username: String,
    /// Email address.
    pub email: String,
    /// `M`, `F` or `S`.
    pub sex: String,
    /// `"Administrator"` or `"Player"`.
    pub account_type: String,
    /// Successful logins.
    pub login_count: i32,
    /// Last successful login.
    pub last_login: Option<DateTime<Utc>>,
    /// Address of the last login.
    pub last_ip: String,
    /// Character capacity.
    pub character_slots: i16,
}

impl From<Account> for ProfileView {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.account_id,
            username: account.userid,
            email: account.email,
            sex: account.sex.as_str().to_string(),
            account_type: account.role.label().to_string(),
            login_count: account.logincount,
            last_login: account.lastlogin,
            last_ip: account.last_ip,
            character_slots: account.character_slots,
        }
    }
}

/// Profile response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Always `true`.
    pub success: bool,
    /// The profile.
    pub profile: ProfileView,
}

/// Character list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharactersResponse {
    /// Always `true`.
    pub success: bool,
    /// Characters ordered by id.
    pub characters: Vec<Character>,
}

/// Summary of a newly created character.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedCharacterView {
    /// Character id.
    pub id: i32,
    /// Owning account.
    pub account_id: i32,
    /// Character name.
    pub name: String,
    /// Job class code.
    pub class: i16,
    /// Base level.
    pub level: i16,
    /// Job level.
    pub job_level: i16,
}

impl From<&Character> for CreatedCharacterView {
    fn from(character: &Character) -> Self {
        Self {
            id: character.char_id,
            account_id: character.account_id,
            name: character.name.clone(),
            class: character.class,
            level: character.base_level,
            job_level: character.job_level,
        }
    }
}

/// Character creation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterCreatedResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// The new character.
    pub character: CreatedCharacterView,
}

impl CharacterCreatedResponse {
    /// Creates the response for `character`.
    pub fn new(character: &Character) -> Self {
        Self {
            success: true,
            message: format!("Character \"{}\" created", character.name),
            character: character.into(),
        }
    }
}

/// An account row as shown to administrators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserView {
    /// Account id.
    pub account_id: i32,
    /// User id.
    pub userid: String,
    /// Email address.
    pub email: String,
    /// `M`, `F` or `S`.
    pub sex: String,
    /// Raw storage group id.
    pub group_id: i16,
    /// Raw storage ban state.
    pub state: i32,
    /// Successful logins.
    pub logincount: i32,
    /// Last successful login.
    pub lastlogin: Option<DateTime<Utc>>,
    /// Address of the last login.
    pub last_ip: String,
    /// Character capacity.
    pub character_slots: i16,
}

impl From<Account> for AdminUserView {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.account_id,
            userid: account.userid,
            email: account.email,
            sex: account.sex.as_str().to_string(),
            group_id: account.role.group_id(),
            state: account.ban_state.state(),
            logincount: account.logincount,
            lastlogin: account.lastlogin,
            last_ip: account.last_ip,
            character_slots: account.character_slots,
        }
    }
}

/// Paginated account list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    /// Always `true`.
    pub success: bool,
    /// Accounts on this page, newest first.
    pub users: Vec<AdminUserView>,
    /// Current page.
    pub page: u64,
    /// Items per page.
    pub per_page: u64,
    /// Total accounts.
    pub total: u64,
}

/// Site settings response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResponse {
    /// Always `true`.
    pub success: bool,
    /// Key/value map.
    pub settings: BTreeMap<String, String>,
}

/// Admin statistics response.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Always `true`.
    pub success: bool,
    /// Totals.
    pub stats: SiteStats,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"OK"` or `"Error"`.
    pub status: String,
    /// `"Connected"` or `"Disconnected"`.
    pub database: String,
    /// Server time of the check.
    pub timestamp: DateTime<Utc>,
}

/// Public server status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatusResponse {
    /// `"online"` or `"offline"`.
    pub status: String,
    /// Characters in game.
    pub online: u64,
    /// Number of accounts.
    pub total_accounts: u64,
    /// Server time.
    pub server_time: DateTime<Utc>,
}
