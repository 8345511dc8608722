//! # Modal Slot
//!
//! At most one overlay is shown at a time. Opening a modal while another is
//! shown replaces it; nothing stacks.
//!
//! ```text
//!            open(kind, payload)
//!   ┌────────┐ ───────────────► ┌────────────────┐ ──┐ open(other, payload)
//!   │ Closed │                  │ Open(kind, p)  │ ◄─┘ (replaces)
//!   └────────┘ ◄─────────────── └────────────────┘
//!                   close()
//! ```
//!
//! The body scroll lock tied to the open state lives in the application
//! layer; this type only holds the slot.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

/// Overlays the site can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ModalKind {
    Appointment,
    Product,
}

impl ModalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalKind::Appointment => "appointment",
            ModalKind::Product => "product",
        }
    }
}

impl fmt::Display for ModalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModalKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "appointment" => Ok(ModalKind::Appointment),
            "product" => Ok(ModalKind::Product),
            _ => Err(ValidationError::not_allowed(
                "modal",
                &["appointment", "product"],
            )),
        }
    }
}

/// The single modal slot.
///
/// `kind == None` if and only if `is_open == false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modal {
    kind: Option<ModalKind>,
    /// Opaque data for the overlay (e.g. the product being shown).
    payload: Option<Value>,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `kind`, replacing whatever was shown.
    ///
    /// ## Example
    /// ```rust
    /// use clinivet_core::modal::{Modal, ModalKind};
    /// use serde_json::json;
    ///
    /// let mut modal = Modal::new();
    /// modal.open(ModalKind::Appointment, None);
    /// modal.open(ModalKind::Product, Some(json!({ "id": 5 })));
    ///
    /// assert_eq!(modal.kind(), Some(ModalKind::Product));
    /// assert_eq!(modal.payload(), Some(&json!({ "id": 5 })));
    /// ```
    pub fn open(&mut self, kind: ModalKind, payload: Option<Value>) {
        self.kind = Some(kind);
        self.payload = payload;
    }

    /// Hides the modal and drops its payload.
    pub fn close(&mut self) {
        self.kind = None;
        self.payload = None;
    }

    pub fn is_open(&self) -> bool {
        self.kind.is_some()
    }

    pub fn kind(&self) -> Option<ModalKind> {
        self.kind
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// True when `kind` is the one currently shown.
    pub fn is_showing(&self, kind: ModalKind) -> bool {
        self.kind == Some(kind)
    }
}
