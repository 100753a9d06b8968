//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Adaptive hash family used for newly stored passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// bcrypt (`$2b$`), readable by the legacy site.
    #[default]
    Bcrypt,
    /// Argon2id PHC strings.
    Argon2,
}

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Hash family for new passwords.
    #[serde(default)]
    pub hash_algorithm: HashAlgorithm,
    /// bcrypt cost factor.
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    /// Minimum user id length in characters.
    #[serde(default = "default_username_min")]
    pub username_min_length: usize,
    /// Maximum user id length in characters.
    #[serde(default = "default_username_max")]
    pub username_max_length: usize,
    /// Minimum password length in characters.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Character slots granted to new accounts.
    #[serde(default = "default_character_slots")]
    pub default_character_slots: i16,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            hash_algorithm: HashAlgorithm::default(),
            bcrypt_cost: default_bcrypt_cost(),
            username_min_length: default_username_min(),
            username_max_length: default_username_max(),
            password_min_length: default_password_min(),
            default_character_slots: default_character_slots(),
        }
    }
}

fn default_bcrypt_cost() -> u32 {
    10
}

fn default_username_min() -> usize {
    4
}

fn default_username_max() -> usize {
    23
}

fn default_password_min() -> usize {
    6
}

fn default_character_slots() -> i16 {
    9
}
