//! Account service: registration and login orchestration.

use std::sync::Arc;

use tracing::{info, warn};

use midgard_auth::password::{PasswordHasher, verify_password};
use midgard_auth::session::{SessionAuthority, SessionToken};
use midgard_core::config::AuthConfig;
use midgard_core::error::AppError;
use midgard_database::store::AccountStore;
use midgard_entity::account::{Account, AccountRole, NewAccount, Sex};
use midgard_entity::session::{Session, SessionIdentity};

/// Registration: a required field is missing or empty.
pub const FIELDS_REQUIRED: &str = "All fields are required";
/// Registration: user id or email already in use.
pub const ACCOUNT_EXISTS: &str = "An account with this username or email already exists";
/// Login: user id or password missing.
pub const CREDENTIALS_REQUIRED: &str = "Username and password are required";
/// Login: unknown user id or wrong password.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";
/// Login: the account is banned.
pub const ACCOUNT_BLOCKED: &str = "Account is blocked";
/// Maximum stored email length.
pub const MAX_EMAIL_LENGTH: usize = 39;

/// Registration input as received from the client.
#[derive(Debug, Clone, Default)]
pub struct RegisterInput {
    /// Desired user id.
    pub userid: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// `M`, `F` or `S`; defaults to `M`.
    pub sex: Option<String>,
}

/// Login input as received from the client.
#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    /// User id.
    pub userid: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// Handles account registration and the login/logout flow.
#[derive(Debug, Clone)]
pub struct AccountService {
    accounts: Arc<dyn AccountStore>,
    hasher: Arc<PasswordHasher>,
    sessions: Arc<SessionAuthority>,
    config: AuthConfig,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        hasher: Arc<PasswordHasher>,
        sessions: Arc<SessionAuthority>,
        config: AuthConfig,
    ) -> Self {
        Self {
            accounts,
            hasher,
            sessions,
            config,
        }
    }

    /// Registers a new player account and opens a session for it.
    ///
    /// Validation stops at the first failing rule: required fields, user
    /// id length, password length, then uniqueness of user id and email.
    pub async fn register(
        &self,
        input: RegisterInput,
        ip: &str,
        previous: Option<&SessionToken>,
    ) -> Result<(Account, SessionToken), AppError> {
        let (userid, password, email) = match (
            non_empty(input.userid),
            non_empty(input.password),
            non_empty(input.email),
        ) {
            (Some(u), Some(p), Some(e)) => (u, p, e),
            _ => return Err(AppError::validation(FIELDS_REQUIRED)),
        };

        let userid_len = userid.chars().count();
        if userid_len < self.config.username_min_length
            || userid_len > self.config.username_max_length
        {
            return Err(AppError::validation(format!(
                "Username must be {} to {} characters",
                self.config.username_min_length, self.config.username_max_length
            )));
        }

        if password.chars().count() < self.config.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.config.password_min_length
            )));
        }

        if self
            .accounts
            .exists_by_userid_or_email(&userid, &email)
            .await?
        {
            return Err(AppError::conflict(ACCOUNT_EXISTS));
        }

        let sex = match input.sex.as_deref() {
            None | Some("") => Sex::default(),
            Some(code) => code.parse::<Sex>()?,
        };

        if email.chars().count() > MAX_EMAIL_LENGTH {
            return Err(AppError::validation(format!(
                "Email must be at most {MAX_EMAIL_LENGTH} characters"
            )));
        }

        let user_pass = self.hash(password).await?;

        let account = self
            .accounts
            .create(&NewAccount {
                userid,
                user_pass,
                email,
                sex,
                role: AccountRole::Player,
                last_ip: ip.to_string(),
                character_slots: self.config.default_character_slots,
            })
            .await
            .map_err(|e| {
                if e.is_conflict() {
                    AppError::conflict(ACCOUNT_EXISTS)
                } else {
                    e
                }
            })?;

        let token = self
            .sessions
            .establish(previous, SessionIdentity::from(&account))
            .await?;

        info!(
            account_id = account.account_id,
            userid = %account.userid,
            "Account registered"
        );
        Ok((account, token))
    }

    /// Verifies credentials, records the login, and opens a session.
    pub async fn login(
        &self,
        input: LoginInput,
        ip: &str,
        previous: Option<&SessionToken>,
    ) -> Result<(Account, SessionToken), AppError> {
        let (userid, password) = match (non_empty(input.userid), non_empty(input.password)) {
            (Some(u), Some(p)) => (u, p),
            _ => return Err(AppError::validation(CREDENTIALS_REQUIRED)),
        };

        let Some(mut account) = self.accounts.find_by_userid(&userid).await? else {
            warn!(userid = %userid, ip = %ip, "Login failed: unknown account");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        if account.is_banned() {
            warn!(account_id = account.account_id, ip = %ip, "Login refused: account blocked");
            return Err(AppError::authorization(ACCOUNT_BLOCKED));
        }

        if !self.verify(password, account.user_pass.clone()).await? {
            warn!(account_id = account.account_id, ip = %ip, "Login failed: bad password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        self.accounts.record_login(account.account_id, ip).await?;
        account.logincount += 1;
        account.lastlogin = Some(chrono::Utc::now());
        account.last_ip = ip.to_string();

        let token = self
            .sessions
            .establish(previous, SessionIdentity::from(&account))
            .await?;

        info!(
            account_id = account.account_id,
            role = %account.role,
            "Login successful"
        );
        Ok((account, token))
    }

    /// Destroys the caller's session, if any.
    pub async fn logout(&self, token: Option<&SessionToken>) -> Result<(), AppError> {
        if let Some(token) = token {
            self.sessions.destroy(token).await?;
        }
        Ok(())
    }

    /// Resolves the caller's session, if any.
    pub async fn check(&self, token: Option<&SessionToken>) -> Option<Session> {
        match token {
            Some(token) => self.sessions.resolve(token).await,
            None => None,
        }
    }

    async fn hash(&self, password: String) -> Result<String, AppError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
    }

    async fn verify(&self, password: String, stored: String) -> Result<bool, AppError> {
        tokio::task::spawn_blocking(move || verify_password(&password, &stored))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
