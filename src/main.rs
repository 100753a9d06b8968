//! Midgard Web server entry point.
//!
//! Wires configuration, storage, sessions and the HTTP API together and
//! serves until Ctrl-C or SIGTERM.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use midgard_api::{AppState, StoreSet};
use midgard_auth::session::{
    DatabaseSessionStore, MemorySessionStore, SessionCleanup, SessionStore,
};
use midgard_core::config::{AppConfig, SessionBackend};
use midgard_core::error::AppError;
use midgard_database::DatabasePool;
use midgard_database::repositories::{
    AccountRepository, CharacterRepository, SessionRepository, SettingsRepository,
};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load layered configuration: `default`, then `{MIDGARD_ENV}`, then env vars.
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_dir =
        std::env::var("MIDGARD_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let env = std::env::var("MIDGARD_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&config_dir, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Midgard Web");

    // ── Step 1: Database connection + migrations ─────────────────
    let db = Arc::new(DatabasePool::connect(&config.database).await?);
    if config.database.run_migrations {
        midgard_database::migration::run_migrations(db.pool()).await?;
    }
    let pool = db.pool().clone();

    // ── Step 2: Stores ───────────────────────────────────────────
    let stores = StoreSet {
        accounts: Arc::new(AccountRepository::new(pool.clone())),
        characters: Arc::new(CharacterRepository::new(pool.clone())),
        settings: Arc::new(SettingsRepository::new(pool.clone())),
        health: db.clone(),
    };

    // ── Step 3: Session store ────────────────────────────────────
    tracing::info!(backend = %config.session.backend, "Initializing session store");
    let session_store: Arc<dyn SessionStore> = match config.session.backend {
        SessionBackend::Memory => Arc::new(MemorySessionStore::new(&config.session)),
        SessionBackend::Database => Arc::new(DatabaseSessionStore::new(SessionRepository::new(
            pool.clone(),
        ))),
    };

    // ── Step 4: Application state ────────────────────────────────
    let cleanup_interval = Duration::from_secs(config.session.cleanup_interval_minutes.max(1) * 60);
    let state = AppState::new(config, stores, session_store);

    // ── Step 5: Shutdown channel & session sweep ─────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let cleanup = SessionCleanup::new(Arc::clone(&state.sessions));
    let cleanup_handle = tokio::spawn(cleanup.run(cleanup_interval, shutdown_rx));

    // ── Step 6: Serve HTTP ───────────────────────────────────────
    let served = midgard_api::app::serve(state, async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received");
        let _ = shutdown_tx.send(true);
    })
    .await;

    if let Err(e) = cleanup_handle.await {
        tracing::warn!(error = %e, "Session cleanup task ended abnormally");
    }
    db.close().await;

    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
