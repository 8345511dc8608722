//! # Modal Commands
//!
//! Opening and closing overlays. Closing the appointment modal also starts
//! the delayed form reset; opening it again settles any reset still
//! pending.

use serde_json::Value;
use tracing::debug;

use clinivet_core::modal::ModalKind;

use crate::error::ApiError;
use crate::state::{AppointmentState, ModalSnapshot, ModalState, ShopState};

pub fn get_modal(modal: &ModalState) -> ModalSnapshot {
    debug!("get_modal command");
    modal.snapshot()
}

/// Opens an overlay by name (`"appointment"` or `"product"`).
pub fn open_modal(
    modal: &ModalState,
    appointment: &AppointmentState,
    kind: &str,
    payload: Option<Value>,
) -> Result<ModalSnapshot, ApiError> {
    debug!(kind, "open_modal command");

    let kind: ModalKind = kind.parse()?;
    if kind == ModalKind::Appointment {
        appointment.reopen();
    }
    Ok(modal.open(kind, payload))
}

/// Opens the product detail overlay with the product as payload.
pub fn open_product(
    modal: &ModalState,
    shop: &ShopState,
    product_id: u32,
) -> Result<ModalSnapshot, ApiError> {
    debug!(product_id, "open_product command");

    let product = shop.product(product_id)?;
    let payload = serde_json::to_value(&product)
        .map_err(|e| ApiError::internal(format!("Failed to encode product: {}", e)))?;
    Ok(modal.open(ModalKind::Product, Some(payload)))
}

/// Closes whatever is open.
pub fn close_modal(modal: &ModalState, appointment: &AppointmentState) -> ModalSnapshot {
    debug!("close_modal command");

    if modal.close() == Some(ModalKind::Appointment) {
        appointment.schedule_reset();
    }
    modal.snapshot()
}
