//! # Modal State
//!
//! The single overlay slot and the body scroll lock that goes with it.
//!
//! ```text
//!   open(appointment) ──► lock acquired ──► ui:scroll-lock { locked: true }
//!   open(product)     ──► slot replaced, lock kept (no event)
//!   close()           ──► lock dropped  ──► ui:scroll-lock { locked: false }
//!   ModalState dropped while open ──► lock dropped ──► { locked: false }
//! ```
//!
//! The lock is an RAII guard so the release happens on every path out of
//! the open state, including teardown.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use clinivet_core::modal::{Modal, ModalKind};

use crate::events::UiEventEmitter;

/// Holds the page scroll lock while alive.
pub struct ScrollLockGuard {
    emitter: Arc<dyn UiEventEmitter>,
}

impl ScrollLockGuard {
    /// Locks page scrolling.
    pub fn acquire(emitter: Arc<dyn UiEventEmitter>) -> Self {
        emitter.emit_scroll_lock(true);
        ScrollLockGuard { emitter }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.emitter.emit_scroll_lock(false);
    }
}

/// What the overlay host renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalSnapshot {
    pub is_open: bool,
    pub kind: Option<ModalKind>,
    pub payload: Option<Value>,
}

impl From<&Modal> for ModalSnapshot {
    fn from(modal: &Modal) -> Self {
        ModalSnapshot {
            is_open: modal.is_open(),
            kind: modal.kind(),
            payload: modal.payload().cloned(),
        }
    }
}

struct ModalSlot {
    modal: Modal,
    scroll_lock: Option<ScrollLockGuard>,
}

/// Shared modal state.
///
/// ## Invariant
/// `scroll_lock.is_some() == modal.is_open()` whenever the mutex is
/// released.
pub struct ModalState {
    slot: Mutex<ModalSlot>,
    emitter: Arc<dyn UiEventEmitter>,
}

impl ModalState {
    pub fn new(emitter: Arc<dyn UiEventEmitter>) -> Self {
        ModalState {
            slot: Mutex::new(ModalSlot {
                modal: Modal::new(),
                scroll_lock: None,
            }),
            emitter,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ModalSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Shows `kind`, replacing any open modal.
    pub fn open(&self, kind: ModalKind, payload: Option<Value>) -> ModalSnapshot {
        let mut slot = self.lock();
        let previous = slot.modal.kind();
        slot.modal.open(kind, payload);
        if slot.scroll_lock.is_none() {
            slot.scroll_lock = Some(ScrollLockGuard::acquire(self.emitter.clone()));
        }
        debug!(modal = %kind, ?previous, "Modal opened");
        ModalSnapshot::from(&slot.modal)
    }

    /// Hides the modal. Returns the kind that was shown, if any.
    pub fn close(&self) -> Option<ModalKind> {
        let mut slot = self.lock();
        let previous = slot.modal.kind();
        slot.modal.close();
        // Dropping the guard emits the unlock.
        slot.scroll_lock = None;
        if let Some(kind) = previous {
            debug!(modal = %kind, "Modal closed");
        }
        previous
    }

    pub fn snapshot(&self) -> ModalSnapshot {
        ModalSnapshot::from(&self.lock().modal)
    }

    pub fn is_open(&self) -> bool {
        self.lock().modal.is_open()
    }

    pub fn is_showing(&self, kind: ModalKind) -> bool {
        self.lock().modal.is_showing(kind)
    }

    /// Whether page scrolling is currently locked.
    pub fn is_scroll_locked(&self) -> bool {
        self.lock().scroll_lock.is_some()
    }
}
