//! # Clinivet Site Library
//!
//! State engine for the Clinivet storefront. The UI host (a web view
//! bridge, a test harness) builds an [`App`], calls the functions in
//! [`commands`], and listens for [`events`].
//!
//! ## Module Organization
//! ```text
//! clinivet_site/
//! ├── lib.rs          ◄─── You are here (bootstrap & shutdown)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart + drawer
//! │   ├── modal.rs    ◄─── Overlay slot + scroll lock
//! │   ├── theme.rs    ◄─── Light/dark + watcher task
//! │   ├── appointment.rs ◄─ Wizard + delayed reset
//! │   ├── shop.rs     ◄─── Catalog + category filter
//! │   ├── clock.rs    ◄─── Wall clock seam
//! │   └── config.rs   ◄─── site.toml / CLINIVET_* settings
//! ├── commands/       ◄─── Functions the UI host invokes
//! ├── events.rs       ◄─── ui:* events pushed to the host
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize Logging                                                  │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: info,clinivet=debug,sqlx=warn; override with RUST_LOG    │
//! │                                                                         │
//! │  2. Load SiteConfig (defaults → site.toml → CLINIVET_* → validate)      │
//! │     • Unreadable or invalid config ──► CONFIG_ERROR                     │
//! │                                                                         │
//! │  3. Open the preference database                                        │
//! │     • SQLite with WAL mode, pending migrations applied                  │
//! │     • Explicit database_path fails ──► DATABASE_ERROR                   │
//! │     • Platform default fails ──► warn, keep preferences in memory       │
//! │                                                                         │
//! │  4. Build the stores                                                    │
//! │     • Catalog parsed from the embedded product list                     │
//! │     • ThemeState reads "clinivet-theme"                                 │
//! │                                                                         │
//! │  5. Spawn the ThemeWatcher                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod events;
pub mod state;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use clinivet_core::catalog::Catalog;
use clinivet_db::{Database, DbConfig, DbError, MemoryPreferences, PreferenceStore};

use error::ApiError;
use events::{TracingEmitter, UiEventEmitter};
use state::{
    AppointmentState, CartState, Clock, ModalState, ShopState, SiteConfig, SystemClock,
    ThemeState, ThemeWatcher, ThemeWatcherHandle,
};

/// Every store of a running site.
pub struct App {
    pub config: SiteConfig,
    pub shop: ShopState,
    pub cart: CartState,
    pub modal: ModalState,
    pub theme: Arc<ThemeState>,
    pub appointment: AppointmentState,
    watcher: Option<ThemeWatcherHandle>,
    database: Option<Database>,
}

impl App {
    /// Opens the preference database named by `config` and builds the
    /// stores on the real clock.
    pub async fn start(config: SiteConfig, emitter: Arc<dyn UiEventEmitter>) -> Result<Self, ApiError> {
        let (store, database) = open_preferences(&config).await?;
        let mut app = Self::assemble(config, emitter, store, Arc::new(SystemClock)).await?;
        app.database = database;
        Ok(app)
    }

    /// Builds the stores over an explicit preference store and clock.
    pub async fn assemble(
        config: SiteConfig,
        emitter: Arc<dyn UiEventEmitter>,
        store: Arc<dyn PreferenceStore>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ApiError> {
        let catalog = Arc::new(Catalog::builtin()?);
        info!(products = catalog.len(), "Catalog loaded");

        let theme = Arc::new(
            ThemeState::init(store, clock.clone(), emitter.clone(), config.utc_offset_minutes)
                .await,
        );
        let watcher = ThemeWatcher::spawn(theme.clone(), config.theme_poll_interval());

        let app = App {
            shop: ShopState::new(catalog),
            cart: CartState::new(
                emitter.clone(),
                config.free_shipping_threshold(),
                config.flat_shipping_fee(),
            ),
            modal: ModalState::new(emitter),
            theme,
            appointment: AppointmentState::new(
                clock,
                config.appointment_reset_delay(),
                config.utc_offset_minutes,
            ),
            watcher: Some(watcher),
            database: None,
            config,
        };

        info!(store = %app.config.store_name, "Site state initialized");
        Ok(app)
    }

    /// Whether preferences are going to SQLite (as opposed to memory).
    pub fn has_database(&self) -> bool {
        self.database.is_some()
    }

    /// Stops the watcher and closes the database. Dropping the stores
    /// releases the scroll lock if a modal is still open.
    pub async fn shutdown(mut self) {
        info!("Shutting down site state");

        if let Some(watcher) = self.watcher.take() {
            watcher.shutdown().await;
        }
        if let Some(database) = self.database.take() {
            database.close().await;
        }
    }
}

/// Logs, loads config from `config_path` (or the platform location) and
/// starts the site with events written to the log.
pub async fn run(config_path: Option<PathBuf>) -> Result<App, ApiError> {
    init_tracing();

    info!("Starting Clinivet site");

    let config = SiteConfig::load(config_path)?;
    App::start(config, Arc::new(TracingEmitter)).await
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(watcher) = self.watcher.take() {
            watcher.abort();
        }
    }
}

/// SQLite at the configured or platform path.
///
/// A `database_path` set in the config must open. The platform default
/// falls back to memory for the session.
async fn open_preferences(
    config: &SiteConfig,
) -> Result<(Arc<dyn PreferenceStore>, Option<Database>), DbError> {
    let explicit = config.database_path.is_some();
    let Some(path) = config.resolved_database_path() else {
        warn!("Could not determine data directory, theme preference will not persist");
        return Ok((Arc::new(MemoryPreferences::new()), None));
    };

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            warn!(error = %e, ?parent, "Could not create data directory");
        }
    }

    info!(?path, "Database path determined");
    match Database::new(DbConfig::new(path)).await {
        Ok(db) => {
            info!("Database connected and migrations applied");
            Ok((Arc::new(db.preferences()), Some(db)))
        }
        Err(e) if explicit => Err(e),
        Err(e) => {
            warn!(error = %e, "Preference database unavailable, using memory");
            Ok((Arc::new(MemoryPreferences::new()), None))
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=clinivet=trace` - Show trace for clinivet crates only
/// - Default: `info,clinivet=debug,sqlx=warn`
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,clinivet=debug,sqlx=warn"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::events::testing::RecordingEmitter;
    use crate::events::{SCROLL_LOCK_EVENT, THEME_EVENT};
    use crate::state::ManualClock;
    use chrono::{TimeZone, Utc};
    use clinivet_core::modal::ModalKind;
    use clinivet_core::THEME_PREFERENCE_KEY;

    async fn test_app(emitter: Arc<RecordingEmitter>) -> App {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2026, 10, 19, 15, 0, 0).unwrap(),
        ));
        App::assemble(
            SiteConfig::default(),
            emitter,
            Arc::new(MemoryPreferences::new()),
            clock,
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_assemble_wires_stores() {
        let emitter = Arc::new(RecordingEmitter::default());
        let app = test_app(emitter.clone()).await;

        assert!(!app.has_database());
        assert!(!app.shop.snapshot().products.is_empty());
        assert_eq!(app.cart.snapshot().total_items, 0);
        assert!(!app.theme.snapshot().await.is_dark);
        assert_eq!(emitter.named(THEME_EVENT).len(), 1);

        app.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_releases_scroll_lock() {
        let emitter = Arc::new(RecordingEmitter::default());
        let app = test_app(emitter.clone()).await;

        commands::modal::open_modal(&app.modal, &app.appointment, "appointment", None).unwrap();
        assert!(app.modal.is_showing(ModalKind::Appointment));
        app.shutdown().await;

        let locks = emitter.named(SCROLL_LOCK_EVENT);
        assert_eq!(locks.len(), 2);
        assert_eq!(locks[1]["locked"], false);
    }

    #[tokio::test]
    async fn test_start_with_sqlite_persists_theme() {
        let path = std::env::temp_dir().join(format!("clinivet-app-{}.db", std::process::id()));
        let config = SiteConfig {
            database_path: Some(path.clone()),
            ..SiteConfig::default()
        };

        let app = App::start(config.clone(), Arc::new(RecordingEmitter::default()))
            .await
            .unwrap();
        assert!(app.has_database());
        let toggled = commands::theme::toggle_theme(&app.theme).await;
        app.shutdown().await;

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        let stored = db.preferences().get(THEME_PREFERENCE_KEY).await.unwrap();
        assert_eq!(stored.as_deref(), Some(toggled.theme_mode.as_str()));
        db.close().await;

        for suffix in ["", "-wal", "-shm"] {
            std::fs::remove_file(format!("{}{}", path.display(), suffix)).ok();
        }
    }

    #[tokio::test]
    async fn test_unusable_explicit_database_path_fails_start() {
        let blocker = std::env::temp_dir().join(format!("clinivet-blocker-{}", std::process::id()));
        std::fs::write(&blocker, b"not a directory").unwrap();
        let config = SiteConfig {
            database_path: Some(blocker.join("nested").join("clinivet.db")),
            ..SiteConfig::default()
        };

        let result = App::start(config, Arc::new(RecordingEmitter::default())).await;
        std::fs::remove_file(&blocker).ok();

        let err = result.err().unwrap();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[tokio::test]
    async fn test_run_rejects_malformed_config() {
        let path = std::env::temp_dir().join(format!("clinivet-run-{}.toml", std::process::id()));
        std::fs::write(&path, "theme_poll_interval_secs = \"soon\"\n").unwrap();

        let result = run(Some(path.clone())).await;
        std::fs::remove_file(&path).ok();

        let err = result.err().unwrap();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }
}
