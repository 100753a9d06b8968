//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use midgard_auth::password::PasswordHasher;
use midgard_auth::session::{SessionAuthority, SessionStore};
use midgard_core::config::AppConfig;
use midgard_database::store::{AccountStore, CharacterStore, HealthProbe, SettingsStore};
use midgard_service::{
    AccountService, AdminUserService, CharacterService, ProfileService, SiteSettingsService,
    StatsService,
};

/// The storage backends the application runs on.
#[derive(Debug, Clone)]
pub struct StoreSet {
    /// `login` table access.
    pub accounts: Arc<dyn AccountStore>,
    /// `char` table access.
    pub characters: Arc<dyn CharacterStore>,
    /// `site_settings` table access.
    pub settings: Arc<dyn SettingsStore>,
    /// Database liveness probe.
    pub health: Arc<dyn HealthProbe>,
}

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Database liveness probe
    pub health: Arc<dyn HealthProbe>,
    /// Session lifecycle authority
    pub sessions: Arc<SessionAuthority>,

    // ── Services ─────────────────────────────────────────────
    /// Registration, login and logout
    pub account_service: Arc<AccountService>,
    /// Own profile
    pub profile_service: Arc<ProfileService>,
    /// Own characters
    pub character_service: Arc<CharacterService>,
    /// Admin account and character management
    pub admin_user_service: Arc<AdminUserService>,
    /// Site settings
    pub site_settings_service: Arc<SiteSettingsService>,
    /// Dashboard and public statistics
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    /// Wires every service on top of the given stores.
    pub fn new(config: AppConfig, stores: StoreSet, session_store: Arc<dyn SessionStore>) -> Self {
        let sessions = Arc::new(SessionAuthority::new(session_store, &config.session));
        let hasher = Arc::new(PasswordHasher::new(&config.auth));

        let account_service = Arc::new(AccountService::new(
            Arc::clone(&stores.accounts),
            hasher,
            Arc::clone(&sessions),
            config.auth.clone(),
        ));
        let profile_service = Arc::new(ProfileService::new(Arc::clone(&stores.accounts)));
        let character_service = Arc::new(CharacterService::new(
            Arc::clone(&stores.accounts),
            Arc::clone(&stores.characters),
        ));
        let admin_user_service = Arc::new(AdminUserService::new(
            Arc::clone(&stores.accounts),
            Arc::clone(&stores.characters),
        ));
        let site_settings_service = Arc::new(SiteSettingsService::new(Arc::clone(&stores.settings)));
        let stats_service = Arc::new(StatsService::new(
            Arc::clone(&stores.accounts),
            Arc::clone(&stores.characters),
        ));

        Self {
            config: Arc::new(config),
            health: stores.health,
            sessions,
            account_service,
            profile_service,
            character_service,
            admin_user_service,
            site_settings_service,
            stats_service,
        }
    }
}
