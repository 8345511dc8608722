//! # Appointment Commands
//!
//! The wizard inside the appointment modal.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Agendar Cita"  ──► open_modal("appointment")                          │
//! │                                                                         │
//! │  Step 1  Tus datos       update_appointment_field(ownerName, ...)       │
//! │                          next_appointment_step()                        │
//! │  Step 2  Tu mascota      update_appointment_field(service, "dental")    │
//! │                          next_appointment_step() / previous_...()       │
//! │  Step 3  Fecha y hora    update_appointment_field(date, "2026-10-20")   │
//! │                          submit_appointment()                           │
//! │  Done    ¡Cita agendada! summary shown                                  │
//! │                                                                         │
//! │  "Cerrar" ──► close_modal() ──► form cleared after the reset delay      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field mistakes come back inside the snapshot, not as errors. Only an
//! unknown field name is an `Err`.

use tracing::debug;

use clinivet_core::appointment::FormField;

use crate::error::ApiError;
use crate::state::{AppointmentSnapshot, AppointmentState};

pub fn get_appointment(appointment: &AppointmentState) -> AppointmentSnapshot {
    debug!("get_appointment command");
    appointment.snapshot()
}

/// Stores one input value. `field` uses the form's camelCase names
/// (`ownerName`, `petType`, ...).
pub fn update_appointment_field(
    appointment: &AppointmentState,
    field: &str,
    value: &str,
) -> Result<AppointmentSnapshot, ApiError> {
    let field: FormField = field.parse()?;
    debug!(field = %field, "update_appointment_field command");

    let (_, snapshot) = appointment.update_field(field, value);
    Ok(snapshot)
}

pub fn next_appointment_step(appointment: &AppointmentState) -> AppointmentSnapshot {
    debug!("next_appointment_step command");
    appointment.next()
}

pub fn previous_appointment_step(appointment: &AppointmentState) -> AppointmentSnapshot {
    debug!("previous_appointment_step command");
    appointment.back()
}

pub fn submit_appointment(appointment: &AppointmentState) -> AppointmentSnapshot {
    debug!("submit_appointment command");
    appointment.submit()
}
