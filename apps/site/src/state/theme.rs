//! # Theme State
//!
//! Light/dark mode for the session, with the explicit choice persisted.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ThemeState::init                                                       │
//! │    store.get("clinivet-theme")                                          │
//! │      "light" | "dark"      ──► that mode, manual                        │
//! │      missing / junk / error ──► mode for the Lima hour, automatic       │
//! │    emit ui:theme                                                        │
//! │                                                                         │
//! │  ThemeWatcher (every theme_poll_interval, first tick skipped)           │
//! │    automatic ──► tick(hour), emit ui:theme if the mode changed          │
//! │    manual    ──► stop                                                   │
//! │                                                                         │
//! │  toggle_theme                                                           │
//! │    flip, manual = true, store.set (best effort), emit ui:theme          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use clinivet_core::theme::{local_hour, Theme, ThemeMode};
use clinivet_core::THEME_PREFERENCE_KEY;
use clinivet_db::PreferenceStore;

use crate::events::UiEventEmitter;
use crate::state::clock::Clock;

/// Payload of `ui:theme` and the `get_theme` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSnapshot {
    pub is_dark: bool,
    pub theme_mode: ThemeMode,
    pub is_manual: bool,
}

impl From<&Theme> for ThemeSnapshot {
    fn from(theme: &Theme) -> Self {
        ThemeSnapshot {
            is_dark: theme.is_dark(),
            theme_mode: theme.mode(),
            is_manual: theme.is_manual(),
        }
    }
}

/// Shared theme state.
///
/// Uses a tokio mutex: `toggle` holds the lock while the preference is
/// written, so two toggles persist in the order they were applied.
pub struct ThemeState {
    theme: Mutex<Theme>,
    store: Arc<dyn PreferenceStore>,
    clock: Arc<dyn Clock>,
    emitter: Arc<dyn UiEventEmitter>,
    utc_offset_minutes: i32,
}

impl ThemeState {
    /// Resolves the initial theme and emits it.
    pub async fn init(
        store: Arc<dyn PreferenceStore>,
        clock: Arc<dyn Clock>,
        emitter: Arc<dyn UiEventEmitter>,
        utc_offset_minutes: i32,
    ) -> Self {
        let stored = match store.get(THEME_PREFERENCE_KEY).await {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Could not read theme preference, using time of day");
                None
            }
        };

        if let Some(value) = stored.as_deref() {
            if ThemeMode::from_stored(Some(value)).is_none() {
                warn!(value, "Ignoring unrecognised theme preference");
            }
        }

        let hour = local_hour(clock.now(), utc_offset_minutes);
        let theme = Theme::resolve(stored.as_deref(), hour);
        info!(
            mode = %theme.mode(),
            manual = theme.is_manual(),
            hour,
            "Theme resolved"
        );

        let state = ThemeState {
            theme: Mutex::new(theme),
            store,
            clock,
            emitter,
            utc_offset_minutes,
        };
        state.emitter.emit_theme(&ThemeSnapshot::from(&theme));
        state
    }

    fn current_hour(&self) -> u32 {
        local_hour(self.clock.now(), self.utc_offset_minutes)
    }

    /// Re-evaluates the automatic theme against the clock.
    ///
    /// ## Returns
    /// `true` if the mode changed (and an event was emitted).
    pub async fn tick(&self) -> bool {
        let mut theme = self.theme.lock().await;
        let hour = self.current_hour();
        if !theme.tick(hour) {
            return false;
        }
        debug!(mode = %theme.mode(), hour, "Automatic theme switched");
        self.emitter.emit_theme(&ThemeSnapshot::from(&*theme));
        true
    }

    /// Flips the theme and pins it. A failed write is logged; the new mode
    /// still applies for this session.
    pub async fn toggle(&self) -> ThemeSnapshot {
        let mut theme = self.theme.lock().await;
        let mode = theme.toggle();

        if let Err(e) = self.store.set(THEME_PREFERENCE_KEY, mode.as_str()).await {
            warn!(error = %e, %mode, "Could not persist theme preference");
        }

        let snapshot = ThemeSnapshot::from(&*theme);
        info!(%mode, "Theme toggled");
        self.emitter.emit_theme(&snapshot);
        snapshot
    }

    pub async fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot::from(&*self.theme.lock().await)
    }

    pub async fn is_manual(&self) -> bool {
        self.theme.lock().await.is_manual()
    }
}

// =============================================================================
// Theme Watcher
// =============================================================================

/// Background poll that keeps the automatic theme in step with the clock.
pub struct ThemeWatcher {
    state: Arc<ThemeState>,
    poll_interval: Duration,
    shutdown_rx: mpsc::Receiver<()>,
}

/// Handle for stopping the watcher.
pub struct ThemeWatcherHandle {
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl ThemeWatcherHandle {
    /// True once the loop has exited (shutdown or manual override).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stops the loop without waiting.
    pub fn abort(&self) {
        self.task.abort();
    }

    /// Stops the loop and waits for it to exit.
    pub async fn shutdown(self) {
        // Err means the loop already stopped on its own.
        let _ = self.shutdown_tx.send(()).await;
        if let Err(e) = self.task.await {
            warn!(error = %e, "Theme watcher task failed");
        }
    }
}

impl ThemeWatcher {
    /// Spawns the watcher on the current runtime.
    pub fn spawn(state: Arc<ThemeState>, poll_interval: Duration) -> ThemeWatcherHandle {
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        let watcher = ThemeWatcher {
            state,
            poll_interval,
            shutdown_rx,
        };
        let task = tokio::spawn(watcher.run());
        ThemeWatcherHandle { shutdown_tx, task }
    }

    async fn run(mut self) {
        if self.state.is_manual().await {
            debug!("Theme is manual, watcher not started");
            return;
        }

        info!(interval_secs = self.poll_interval.as_secs(), "Theme watcher starting");

        let mut interval =
            tokio::time::interval_at(Instant::now() + self.poll_interval, self.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if self.state.is_manual().await {
                        debug!("Theme pinned by user, watcher stopping");
                        break;
                    }
                    self.state.tick().await;
                }

                _ = self.shutdown_rx.recv() => {
                    info!("Theme watcher shutting down");
                    break;
                }
            }
        }

        info!("Theme watcher stopped");
    }
}
