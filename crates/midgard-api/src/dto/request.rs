//! Request DTOs.
//!
//! Fields are optional so missing values reach the services and produce
//! their ordered validation messages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use midgard_service::admin::AdminCharacterInput;
use midgard_service::{LoginInput, RegisterInput};

/// Registration request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired user id.
    #[serde(alias = "userId", alias = "userid")]
    pub username: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// `M`, `F` or `S`.
    pub sex: Option<String>,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(req: RegisterRequest) -> Self {
        Self {
            userid: req.username,
            password: req.password,
            email: req.email,
            sex: req.sex,
        }
    }
}

/// Login request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    /// User id.
    #[serde(alias = "userId", alias = "userid")]
    pub username: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

impl From<LoginRequest> for LoginInput {
    fn from(req: LoginRequest) -> Self {
        Self {
            userid: req.username,
            password: req.password,
        }
    }
}

/// Email change request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmailRequest {
    /// New email address.
    pub email: Option<String>,
}

/// Self-service character creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacterRequest {
    /// Character name.
    pub char_name: Option<String>,
    /// Job class code.
    pub char_class: Option<i16>,
}

/// Admin character creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCreateCharacterRequest {
    /// Target account.
    pub account_id: Option<i32>,
    /// Character name.
    pub char_name: Option<String>,
    /// Job class code.
    pub char_class: Option<i16>,
}

impl From<AdminCreateCharacterRequest> for AdminCharacterInput {
    fn from(req: AdminCreateCharacterRequest) -> Self {
        Self {
            account_id: req.account_id,
            name: req.char_name,
            class: req.char_class,
        }
    }
}

/// Ban or unban request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BanRequest {
    /// `true` to ban, `false` to lift the ban.
    #[serde(default)]
    pub banned: bool,
}

/// Site settings update. Non-string values are stored as their JSON text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    /// Keys to insert or overwrite.
    pub settings: Option<BTreeMap<String, serde_json::Value>>,
}

impl UpdateSettingsRequest {
    /// The settings as stored text values, if present.
    pub fn into_text_values(self) -> Option<BTreeMap<String, String>> {
        self.settings.map(|settings| {
            settings
                .into_iter()
                .map(|(key, value)| {
                    let text = match value {
                        serde_json::Value::String(s) => s,
                        serde_json::Value::Null => String::new(),
                        other => other.to_string(),
                    };
                    (key, text)
                })
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_accepts_userid_alias() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"userId":"poring","password":"secret1","email":"a@b.c"}"#)
                .unwrap();
        assert_eq!(req.username.as_deref(), Some("poring"));
        assert!(req.sex.is_none());
    }

    #[test]
    fn test_settings_values_become_text() {
        let req: UpdateSettingsRequest = serde_json::from_str(
            r#"{"settings":{"max_players":2000,"server_status":"offline","motd":null}}"#,
        )
        .unwrap();
        let values = req.into_text_values().unwrap();
        assert_eq!(values["max_players"], "2000");
        assert_eq!(values["server_status"], "offline");
        assert_eq!(values["motd"], "");
    }
}
