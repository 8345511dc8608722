//! # UI Events
//!
//! Push notifications from the stores to the UI host.
//!
//! ## Events
//! | Name | Payload | Emitted when |
//! |------|---------|--------------|
//! | `ui:scroll-lock` | `{ locked }` | a modal opens (lock) or closes / is dropped (unlock) |
//! | `ui:theme` | `{ isDark, themeMode, isManual }` | the resolved theme changes |
//! | `ui:cart` | cart snapshot | any cart mutation |
//!
//! ## Host Side
//! ```text
//! listen('ui:scroll-lock', e => document.body.style.overflow =
//!     e.payload.locked ? 'hidden' : '');
//! listen('ui:theme', e => root.classList.toggle('dark', e.payload.isDark));
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use crate::state::{CartSnapshot, ThemeSnapshot};

pub const SCROLL_LOCK_EVENT: &str = "ui:scroll-lock";
pub const THEME_EVENT: &str = "ui:theme";
pub const CART_EVENT: &str = "ui:cart";

/// Payload of `ui:scroll-lock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollLockEvent {
    pub locked: bool,
}

/// Emits store changes to the UI host.
///
/// Implementations must not block: they are called while store locks are
/// held.
pub trait UiEventEmitter: Send + Sync {
    /// Emits a body scroll lock change.
    fn emit_scroll_lock(&self, locked: bool);

    /// Emits the resolved theme.
    fn emit_theme(&self, theme: &ThemeSnapshot);

    /// Emits the cart after a mutation.
    fn emit_cart(&self, cart: &CartSnapshot);
}

/// Emitter that drops everything. Default when no host is attached.
pub struct NoOpEmitter;

impl UiEventEmitter for NoOpEmitter {
    fn emit_scroll_lock(&self, _locked: bool) {}
    fn emit_theme(&self, _theme: &ThemeSnapshot) {}
    fn emit_cart(&self, _cart: &CartSnapshot) {}
}

/// JSON body the host receives for an event.
pub fn event_payload(payload: &impl Serialize) -> serde_json::Result<String> {
    serde_json::to_string(payload)
}

/// Emitter that writes every event and its payload to the log at debug
/// level.
pub struct TracingEmitter;

impl TracingEmitter {
    fn log(event: &'static str, payload: &impl Serialize) {
        match event_payload(payload) {
            Ok(json) => debug!(event, payload = %json, "Emitted"),
            Err(e) => warn!(event, error = %e, "Could not serialize event payload"),
        }
    }
}

impl UiEventEmitter for TracingEmitter {
    fn emit_scroll_lock(&self, locked: bool) {
        Self::log(SCROLL_LOCK_EVENT, &ScrollLockEvent { locked });
    }

    fn emit_theme(&self, theme: &ThemeSnapshot) {
        Self::log(THEME_EVENT, theme);
    }

    fn emit_cart(&self, cart: &CartSnapshot) {
        Self::log(CART_EVENT, cart);
    }
}
