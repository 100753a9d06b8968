//! Account management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use midgard_auth::password::PasswordHasher;
use midgard_core::config::AppConfig;
use midgard_core::error::AppError;
use midgard_core::types::pagination::PageRequest;
use midgard_database::repositories::AccountRepository;
use midgard_database::store::AccountStore;
use midgard_entity::account::{Account, AccountRole, BanState, NewAccount, Sex};

use crate::output::{self, OutputFormat};

/// Arguments for account commands
#[derive(Debug, Args)]
pub struct AccountArgs {
    /// Account subcommand
    #[command(subcommand)]
    pub command: AccountCommand,
}

/// Account subcommands
#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// List accounts, newest first
    List {
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Accounts per page
        #[arg(long, default_value_t = 100)]
        per_page: u64,
    },
    /// Create an administrator account
    CreateAdmin {
        /// Login name
        userid: String,
        /// Email address
        email: String,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Ban an account
    Ban {
        /// Login name
        userid: String,
    },
    /// Lift a ban
    Unban {
        /// Login name
        userid: String,
    },
}

/// Account display row
#[derive(Debug, Serialize, Tabled)]
struct AccountRow {
    /// Account ID
    id: i32,
    /// Login name
    userid: String,
    /// Email
    email: String,
    /// Role
    role: String,
    /// Ban state
    state: String,
    /// Login count
    logins: i32,
    /// Last login
    last_login: String,
}

impl From<&Account> for AccountRow {
    fn from(a: &Account) -> Self {
        Self {
            id: a.account_id,
            userid: a.userid.clone(),
            email: a.email.clone(),
            role: a.role.to_string(),
            state: a.ban_state.to_string(),
            logins: a.logincount,
            last_login: a
                .lastlogin
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Execute account commands
pub async fn execute(
    args: &AccountArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;
    let accounts = AccountRepository::new(pool.pool().clone());

    let result = run(&args.command, &accounts, config, format).await;
    pool.close().await;
    result
}

async fn run(
    command: &AccountCommand,
    accounts: &AccountRepository,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match command {
        AccountCommand::List { page, per_page } => {
            let page = accounts.list(&PageRequest::new(*page, *per_page)).await?;
            let rows: Vec<AccountRow> = page.items.iter().map(AccountRow::from).collect();
            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                println!(
                    "Page {} of {} ({} accounts)",
                    page.page,
                    page.total_pages(),
                    page.total_items
                );
            }
        }
        AccountCommand::CreateAdmin {
            userid,
            email,
            password,
        } => {
            if accounts.exists_by_userid_or_email(userid, email).await? {
                return Err(AppError::conflict(format!(
                    "An account named '{userid}' or using '{email}' already exists"
                )));
            }

            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Admin password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };
            if password.chars().count() < config.auth.password_min_length {
                return Err(AppError::validation(format!(
                    "Password must be at least {} characters",
                    config.auth.password_min_length
                )));
            }

            let user_pass = PasswordHasher::new(&config.auth).hash_password(&password)?;
            let account = accounts
                .create(&NewAccount {
                    userid: userid.clone(),
                    user_pass,
                    email: email.clone(),
                    sex: Sex::default(),
                    role: AccountRole::Admin,
                    last_ip: "127.0.0.1".to_string(),
                    character_slots: config.auth.default_character_slots,
                })
                .await?;

            info!(
                account_id = account.account_id,
                userid = %account.userid,
                "Admin account created from CLI"
            );
            output::print_success(&format!(
                "Admin account '{}' created (id: {})",
                account.userid, account.account_id
            ));
        }
        AccountCommand::Ban { userid } => {
            set_ban(accounts, userid, BanState::Banned).await?;
            output::print_success(&format!("Account '{userid}' banned"));
        }
        AccountCommand::Unban { userid } => {
            set_ban(accounts, userid, BanState::Active).await?;
            output::print_success(&format!("Account '{userid}' unbanned"));
        }
    }

    Ok(())
}

async fn set_ban(
    accounts: &AccountRepository,
    userid: &str,
    state: BanState,
) -> Result<(), AppError> {
    let account = accounts
        .find_by_userid(userid)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Account '{userid}' not found")))?;
    accounts.set_ban_state(account.account_id, state).await?;
    info!(
        account_id = account.account_id,
        userid = %account.userid,
        state = ?state,
        "Ban state changed from CLI"
    );
    Ok(())
}
