//! # Appointment State
//!
//! The wizard behind the appointment modal, plus the delayed reset that
//! runs after the modal closes.
//!
//! ## Reset Timing
//! ```text
//! close_modal ──► schedule_reset() ──► (reset delay) ──► wizard.reset()
//!                        │
//! open_appointment ──► reopen() ──► pending reset aborted, wizard reset now
//! ```
//!
//! Without a tokio runtime (plain unit tests, sync hosts) the reset runs
//! immediately.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::debug;

use clinivet_core::appointment::{
    AppointmentForm, AppointmentSummary, AppointmentWizard, FieldErrors, FormField, WizardStep,
};
use clinivet_core::FieldError;

use crate::state::clock::{local_date, Clock};

/// What the appointment modal renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSnapshot {
    pub form: AppointmentForm,
    pub step: WizardStep,
    /// 1-3 while filling in, 4 on the confirmation screen.
    pub step_number: u8,
    /// Inline messages keyed by field.
    pub errors: BTreeMap<FormField, &'static str>,
    /// Machine-readable error per field.
    pub error_codes: FieldErrors,
    /// Present only once submitted.
    pub summary: Option<AppointmentSummary>,
}

impl From<&AppointmentWizard> for AppointmentSnapshot {
    fn from(wizard: &AppointmentWizard) -> Self {
        AppointmentSnapshot {
            form: wizard.form().clone(),
            step: wizard.step(),
            step_number: wizard.step().number(),
            errors: wizard.errors().messages(),
            error_codes: wizard.errors().clone(),
            summary: wizard.summary(),
        }
    }
}

/// Shared appointment wizard.
pub struct AppointmentState {
    wizard: Arc<Mutex<AppointmentWizard>>,
    pending_reset: Mutex<Option<JoinHandle<()>>>,
    reset_delay: Duration,
    clock: Arc<dyn Clock>,
    utc_offset_minutes: i32,
}

impl AppointmentState {
    pub fn new(clock: Arc<dyn Clock>, reset_delay: Duration, utc_offset_minutes: i32) -> Self {
        AppointmentState {
            wizard: Arc::new(Mutex::new(AppointmentWizard::new())),
            pending_reset: Mutex::new(None),
            reset_delay,
            clock,
            utc_offset_minutes,
        }
    }

    fn lock(&self) -> MutexGuard<'_, AppointmentWizard> {
        self.wizard.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn take_pending(&self) -> Option<JoinHandle<()>> {
        self.pending_reset
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    pub fn snapshot(&self) -> AppointmentSnapshot {
        AppointmentSnapshot::from(&*self.lock())
    }

    /// Stores one input. A rejected choice is reported both here and in the
    /// snapshot's error map.
    pub fn update_field(
        &self,
        field: FormField,
        value: &str,
    ) -> (Result<(), FieldError>, AppointmentSnapshot) {
        let mut wizard = self.lock();
        let result = wizard.update_field(field, value);
        (result, AppointmentSnapshot::from(&*wizard))
    }

    /// "Siguiente".
    pub fn next(&self) -> AppointmentSnapshot {
        let mut wizard = self.lock();
        let moved = wizard.handle_next();
        debug!(moved, step = wizard.step().number(), "Wizard next");
        AppointmentSnapshot::from(&*wizard)
    }

    /// "Anterior".
    pub fn back(&self) -> AppointmentSnapshot {
        let mut wizard = self.lock();
        wizard.handle_back();
        AppointmentSnapshot::from(&*wizard)
    }

    /// "Confirmar Cita". Dates are checked against today in the clinic's
    /// zone.
    pub fn submit(&self) -> AppointmentSnapshot {
        let today = local_date(self.clock.now(), self.utc_offset_minutes);
        let mut wizard = self.lock();
        if wizard.handle_submit(today).is_none() {
            debug!(errors = wizard.errors().len(), "Appointment not submitted");
        }
        AppointmentSnapshot::from(&*wizard)
    }

    /// Clears the wizard after the reset delay, replacing any reset already
    /// pending.
    pub fn schedule_reset(&self) {
        if let Some(previous) = self.take_pending() {
            previous.abort();
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            self.lock().reset();
            return;
        };

        let wizard = Arc::clone(&self.wizard);
        let delay = self.reset_delay;
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            wizard
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .reset();
            debug!("Appointment form reset");
        });

        *self
            .pending_reset
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(task);
    }

    /// Called when the modal opens again. A reset still waiting on its
    /// delay is cancelled and applied now.
    pub fn reopen(&self) -> AppointmentSnapshot {
        if let Some(pending) = self.take_pending() {
            pending.abort();
            self.lock().reset();
            debug!("Pending appointment reset applied early");
        }
        self.snapshot()
    }

    /// Whether a delayed reset is still waiting.
    pub fn has_pending_reset(&self) -> bool {
        self.pending_reset
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl Drop for AppointmentState {
    fn drop(&mut self) {
        if let Some(pending) = self.take_pending() {
            pending.abort();
        }
    }
}
