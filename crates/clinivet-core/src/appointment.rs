//! # Appointment Wizard
//!
//! The three-step appointment request form.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────┐  next   ┌───────────────┐  next   ┌──────────┐  submit   │
//! │   │ Contact  │ ──────► │ PetAndService │ ──────► │ Schedule │ ───────┐  │
//! │   │   (1)    │ ◄────── │      (2)      │ ◄────── │   (3)    │        │  │
//! │   └──────────┘  back   └───────────────┘  back   └──────────┘        │  │
//! │                                                                      ▼  │
//! │                                                           ┌───────────┐ │
//! │                              reset() (after close) ◄───── │ Submitted │ │
//! │                                                           └───────────┘ │
//! │                                                                         │
//! │  next: runs the current step's guard. submit: runs all three and goes   │
//! │  back to the first failing step. back: never validates.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guards
//! | Step | Required |
//! |------|----------|
//! | Contact | owner name, phone, email (`local@domain.tld`) |
//! | PetAndService | pet name, service |
//! | Schedule | date (not before today), time; notes optional |

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::info;
use ts_rs::TS;

use crate::error::{FieldError, ValidationError};
use crate::types::{PetType, Service, TimeSlot};
use crate::validation::{validate_appointment_date, validate_email, validate_required};

// =============================================================================
// Form Field
// =============================================================================

/// A named input of the appointment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    OwnerName,
    Phone,
    Email,
    PetName,
    PetType,
    Service,
    Date,
    Time,
    Notes,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::OwnerName,
        FormField::Phone,
        FormField::Email,
        FormField::PetName,
        FormField::PetType,
        FormField::Service,
        FormField::Date,
        FormField::Time,
        FormField::Notes,
    ];

    /// Wire name, as the UI host sends it.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::OwnerName => "ownerName",
            FormField::Phone => "phone",
            FormField::Email => "email",
            FormField::PetName => "petName",
            FormField::PetType => "petType",
            FormField::Service => "service",
            FormField::Date => "date",
            FormField::Time => "time",
            FormField::Notes => "notes",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = FormField::ALL.iter().map(|f| f.as_str()).collect();
                ValidationError::not_allowed("field", &names)
            })
    }
}

// =============================================================================
// Form
// =============================================================================

/// Values captured by the wizard.
///
/// Text inputs are kept verbatim (untrimmed) so the UI host can echo them
/// back into the inputs; the guards trim when checking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentForm {
    pub owner_name: String,
    pub phone: String,
    pub email: String,
    pub pet_name: String,
    pub pet_type: PetType,
    /// `None` until a service is picked.
    pub service: Option<Service>,
    /// `YYYY-MM-DD` as produced by the date picker.
    pub date: String,
    /// One of the offered slot values (`"09:00"` ...), empty until picked.
    pub time: String,
    pub notes: String,
}

// =============================================================================
// Steps and Errors
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    #[default]
    Contact,
    PetAndService,
    Schedule,
    Submitted,
}

impl WizardStep {
    /// Position for the progress indicator: 1-3, and 4 once submitted.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Contact => 1,
            WizardStep::PetAndService => 2,
            WizardStep::Schedule => 3,
            WizardStep::Submitted => 4,
        }
    }

    fn next(&self) -> Self {
        match self {
            WizardStep::Contact => WizardStep::PetAndService,
            WizardStep::PetAndService => WizardStep::Schedule,
            other => *other,
        }
    }

    fn previous(&self) -> Self {
        match self {
            WizardStep::PetAndService => WizardStep::Contact,
            WizardStep::Schedule => WizardStep::PetAndService,
            other => *other,
        }
    }
}

/// Per-field errors currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, field: FormField, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    /// Inline messages keyed by field, as displayed under each input.
    pub fn messages(&self) -> BTreeMap<FormField, &'static str> {
        self.iter()
            .map(|(field, error)| (field, error.message(field)))
            .collect()
    }

    fn check(&mut self, field: FormField, result: Result<(), FieldError>) {
        if let Err(error) = result {
            self.insert(field, error);
        }
    }
}

// =============================================================================
// Summary
// =============================================================================

/// What the confirmation screen shows after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSummary {
    pub owner_name: String,
    pub pet_name: String,
    pub service_label: String,
    /// e.g. `martes, 20 de octubre de 2026`
    pub date_label: String,
    /// e.g. `2:00 PM`
    pub time_label: String,
    pub email: String,
}

const WEEKDAYS_ES: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Long Spanish date, e.g. `martes, 20 de octubre de 2026`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use clinivet_core::appointment::long_date_es;
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
/// assert_eq!(long_date_es(date), "martes, 20 de octubre de 2026");
/// ```
pub fn long_date_es(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_ES[weekday_index(date.weekday())];
    let month = MONTHS_ES[date.month0() as usize];
    format!("{}, {} de {} de {}", weekday, date.day(), month, date.year())
}

fn weekday_index(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}

// =============================================================================
// Wizard
// =============================================================================

/// Form values, current step and visible errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentWizard {
    form: AppointmentForm,
    step: WizardStep,
    errors: FieldErrors,
}

impl AppointmentWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &AppointmentForm {
        &self.form
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitted(&self) -> bool {
        self.step == WizardStep::Submitted
    }

    /// Stores an input value and clears that field's error.
    ///
    /// Choice fields (pet type, service, time) only accept the offered
    /// codes; anything else leaves the value untouched and records
    /// [`FieldError::InvalidChoice`]. An empty service or time clears the
    /// selection. Edits after submission are ignored.
    pub fn update_field(&mut self, field: FormField, value: &str) -> Result<(), FieldError> {
        if self.is_submitted() {
            return Ok(());
        }

        let result = self.apply(field, value);
        match result {
            Ok(()) => self.errors.remove(field),
            Err(error) => self.errors.insert(field, error),
        }
        result
    }

    fn apply(&mut self, field: FormField, value: &str) -> Result<(), FieldError> {
        let form = &mut self.form;
        match field {
            FormField::OwnerName => form.owner_name = value.to_string(),
            FormField::Phone => form.phone = value.to_string(),
            FormField::Email => form.email = value.to_string(),
            FormField::PetName => form.pet_name = value.to_string(),
            FormField::Date => form.date = value.to_string(),
            FormField::Notes => form.notes = value.to_string(),
            FormField::PetType => {
                form.pet_type = value.parse().map_err(|_| FieldError::InvalidChoice)?;
            }
            FormField::Service => {
                form.service = if value.is_empty() {
                    None
                } else {
                    Some(value.parse().map_err(|_| FieldError::InvalidChoice)?)
                };
            }
            FormField::Time => {
                if !value.is_empty() && TimeSlot::find(value).is_none() {
                    return Err(FieldError::InvalidChoice);
                }
                form.time = value.to_string();
            }
        }
        Ok(())
    }

    /// Runs the current step's guard and advances on success.
    ///
    /// The error map is replaced by the guard's findings. From `Schedule`
    /// only [`handle_submit`](Self::handle_submit) moves forward, and
    /// `Submitted` is terminal.
    ///
    /// ## Returns
    /// `true` if the step changed.
    pub fn handle_next(&mut self) -> bool {
        let errors = match self.step {
            WizardStep::Contact => self.check_contact(),
            WizardStep::PetAndService => self.check_pet_and_service(),
            WizardStep::Schedule | WizardStep::Submitted => return false,
        };

        let passed = errors.is_empty();
        self.errors = errors;
        if passed {
            self.step = self.step.next();
        }
        passed
    }

    /// Goes back one step without validating. Saturates at `Contact`;
    /// does nothing once submitted.
    pub fn handle_back(&mut self) -> bool {
        let previous = self.step.previous();
        let moved = previous != self.step;
        self.step = previous;
        moved
    }

    /// Runs every step's guard and, on success, moves to `Submitted`.
    ///
    /// Fields of earlier steps stay editable while on `Schedule`, so their
    /// guards run again here. The first failing step becomes the current
    /// step with its errors shown. `today` is the clinic's current date;
    /// earlier dates are refused.
    ///
    /// ## Returns
    /// The confirmation summary, or `None` if a guard failed or the
    /// wizard is not on the schedule step.
    pub fn handle_submit(&mut self, today: NaiveDate) -> Option<AppointmentSummary> {
        if self.step != WizardStep::Schedule {
            return None;
        }

        let guards = [
            (WizardStep::Contact, self.check_contact()),
            (WizardStep::PetAndService, self.check_pet_and_service()),
            (WizardStep::Schedule, self.check_schedule(today)),
        ];
        if let Some((step, errors)) = guards.into_iter().find(|(_, errors)| !errors.is_empty()) {
            self.step = step;
            self.errors = errors;
            return None;
        }

        let summary = self.build_summary()?;
        self.errors = FieldErrors::new();
        self.step = WizardStep::Submitted;

        info!(
            pet = %summary.pet_name,
            service = %summary.service_label,
            date = %self.form.date,
            time = %self.form.time,
            "Appointment submitted"
        );
        Some(summary)
    }

    /// Confirmation summary; `Some` only after a successful submit.
    pub fn summary(&self) -> Option<AppointmentSummary> {
        if !self.is_submitted() {
            return None;
        }
        self.build_summary()
    }

    fn build_summary(&self) -> Option<AppointmentSummary> {
        let form = &self.form;
        let date = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d").ok()?;
        let slot = TimeSlot::find(&form.time)?;
        let service = form.service?;

        Some(AppointmentSummary {
            owner_name: form.owner_name.trim().to_string(),
            pet_name: form.pet_name.trim().to_string(),
            service_label: service.label().to_string(),
            date_label: long_date_es(date),
            time_label: slot.label.to_string(),
            email: form.email.trim().to_string(),
        })
    }

    /// Empties the form, returns to `Contact` and clears errors.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn check_contact(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(FormField::OwnerName, validate_required(&self.form.owner_name));
        errors.check(FormField::Phone, validate_required(&self.form.phone));
        errors.check(FormField::Email, validate_email(&self.form.email));
        errors
    }

    fn check_pet_and_service(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(FormField::PetName, validate_required(&self.form.pet_name));
        if self.form.service.is_none() {
            errors.insert(FormField::Service, FieldError::Required);
        }
        errors
    }

    fn check_schedule(&self, today: NaiveDate) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            FormField::Date,
            validate_appointment_date(&self.form.date, today).map(|_| ()),
        );
        errors.check(FormField::Time, validate_required(&self.form.time));
        errors
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn fill_contact(wizard: &mut AppointmentWizard) {
        wizard.update_field(FormField::OwnerName, "Ana Torres").unwrap();
        wizard.update_field(FormField::Phone, "987 654 321").unwrap();
        wizard.update_field(FormField::Email, "ana@correo.pe").unwrap();
    }

    fn fill_pet(wizard: &mut AppointmentWizard) {
        wizard.update_field(FormField::PetName, "Rocky").unwrap();
        wizard.update_field(FormField::PetType, "gato").unwrap();
        wizard.update_field(FormField::Service, "vacunacion").unwrap();
    }

    fn at_schedule() -> AppointmentWizard {
        let mut wizard = AppointmentWizard::new();
        fill_contact(&mut wizard);
        assert!(wizard.handle_next());
        fill_pet(&mut wizard);
        assert!(wizard.handle_next());
        assert_eq!(wizard.step(), WizardStep::Schedule);
        wizard
    }

    #[test]
    fn test_empty_owner_name_blocks_step_one() {
        let mut wizard = AppointmentWizard::new();
        wizard.update_field(FormField::Phone, "987").unwrap();
        wizard.update_field(FormField::Email, "ana@correo.pe").unwrap();

        assert!(!wizard.handle_next());
        assert_eq!(wizard.step(), WizardStep::Contact);
        assert_eq!(wizard.errors().get(FormField::OwnerName), Some(FieldError::Required));
        assert_eq!(wizard.errors().len(), 1);
        assert_eq!(
            wizard.errors().messages().get(&FormField::OwnerName),
            Some(&"Nombre requerido")
        );
    }

    #[test]
    fn test_valid_contact_advances() {
        let mut wizard = AppointmentWizard::new();
        fill_contact(&mut wizard);

        assert!(wizard.handle_next());
        assert_eq!(wizard.step(), WizardStep::PetAndService);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut wizard = AppointmentWizard::new();
        fill_contact(&mut wizard);
        wizard.update_field(FormField::Phone, "   ").unwrap();

        assert!(!wizard.handle_next());
        assert_eq!(wizard.errors().get(FormField::Phone), Some(FieldError::Required));
    }

    #[test]
    fn test_bad_email_blocks() {
        let mut wizard = AppointmentWizard::new();
        fill_contact(&mut wizard);
        wizard.update_field(FormField::Email, "ana@correo").unwrap();

        assert!(!wizard.handle_next());
        assert_eq!(wizard.errors().get(FormField::Email), Some(FieldError::MalformedEmail));
    }

    #[test]
    fn test_update_field_clears_its_error() {
        let mut wizard = AppointmentWizard::new();
        assert!(!wizard.handle_next());
        assert!(wizard.errors().contains(FormField::OwnerName));
        assert!(wizard.errors().contains(FormField::Phone));

        wizard.update_field(FormField::OwnerName, "A").unwrap();
        assert!(!wizard.errors().contains(FormField::OwnerName));
        assert!(wizard.errors().contains(FormField::Phone));
    }

    #[test]
    fn test_invalid_choices_rejected() {
        let mut wizard = AppointmentWizard::new();

        assert_eq!(
            wizard.update_field(FormField::PetType, "dragon"),
            Err(FieldError::InvalidChoice)
        );
        assert_eq!(wizard.form().pet_type, PetType::Perro);

        assert_eq!(
            wizard.update_field(FormField::Service, "masajes"),
            Err(FieldError::InvalidChoice)
        );
        assert_eq!(wizard.form().service, None);

        assert_eq!(
            wizard.update_field(FormField::Time, "13:00"),
            Err(FieldError::InvalidChoice)
        );
        assert_eq!(wizard.errors().get(FormField::Time), Some(FieldError::InvalidChoice));

        wizard.update_field(FormField::Time, "14:00").unwrap();
        assert!(!wizard.errors().contains(FormField::Time));
    }

    #[test]
    fn test_step_two_requires_pet_and_service() {
        let mut wizard = AppointmentWizard::new();
        fill_contact(&mut wizard);
        wizard.handle_next();

        assert!(!wizard.handle_next());
        assert_eq!(wizard.errors().get(FormField::PetName), Some(FieldError::Required));
        assert_eq!(wizard.errors().get(FormField::Service), Some(FieldError::Required));
        assert_eq!(
            wizard.errors().messages().get(&FormField::Service),
            Some(&"Selecciona un servicio")
        );
    }

    #[test]
    fn test_back_never_validates_and_saturates() {
        let mut wizard = at_schedule();
        wizard.update_field(FormField::PetName, "").unwrap();

        assert!(wizard.handle_back());
        assert_eq!(wizard.step(), WizardStep::PetAndService);
        assert!(wizard.handle_back());
        assert_eq!(wizard.step(), WizardStep::Contact);
        assert!(!wizard.handle_back());
        assert_eq!(wizard.step(), WizardStep::Contact);
    }

    #[test]
    fn test_next_on_schedule_is_noop() {
        let mut wizard = at_schedule();
        assert!(!wizard.handle_next());
        assert_eq!(wizard.step(), WizardStep::Schedule);
    }

    #[test]
    fn test_submit_requires_date_and_time() {
        let mut wizard = at_schedule();

        assert!(wizard.handle_submit(today()).is_none());
        assert_eq!(wizard.step(), WizardStep::Schedule);
        assert_eq!(wizard.errors().get(FormField::Date), Some(FieldError::Required));
        assert_eq!(wizard.errors().get(FormField::Time), Some(FieldError::Required));
    }

    #[test]
    fn test_submit_rejects_past_and_malformed_dates() {
        let mut wizard = at_schedule();
        wizard.update_field(FormField::Time, "10:00").unwrap();

        wizard.update_field(FormField::Date, "2026-10-18").unwrap();
        assert!(wizard.handle_submit(today()).is_none());
        assert_eq!(wizard.errors().get(FormField::Date), Some(FieldError::PastDate));

        wizard.update_field(FormField::Date, "20/10/2026").unwrap();
        assert!(wizard.handle_submit(today()).is_none());
        assert_eq!(wizard.errors().get(FormField::Date), Some(FieldError::MalformedDate));
    }

    #[test]
    fn test_submit_success_summary() {
        let mut wizard = at_schedule();
        wizard.update_field(FormField::Date, "2026-10-20").unwrap();
        wizard.update_field(FormField::Time, "14:00").unwrap();

        let summary = wizard.handle_submit(today()).unwrap();
        assert!(wizard.is_submitted());
        assert!(wizard.errors().is_empty());
        assert_eq!(summary.pet_name, "Rocky");
        assert_eq!(summary.service_label, "Vacunación");
        assert_eq!(summary.date_label, "martes, 20 de octubre de 2026");
        assert_eq!(summary.time_label, "2:00 PM");
        assert_eq!(summary.email, "ana@correo.pe");
        assert_eq!(wizard.summary(), Some(summary));
    }

    #[test]
    fn test_submit_rechecks_earlier_steps() {
        let mut wizard = at_schedule();
        wizard.update_field(FormField::Service, "").unwrap();
        wizard.update_field(FormField::Date, "2026-10-20").unwrap();
        wizard.update_field(FormField::Time, "14:00").unwrap();

        assert!(wizard.handle_submit(today()).is_none());
        assert_eq!(wizard.step(), WizardStep::PetAndService);
        assert_eq!(wizard.errors().get(FormField::Service), Some(FieldError::Required));
        assert_eq!(wizard.errors().len(), 1);
        assert!(wizard.summary().is_none());

        wizard.update_field(FormField::Service, "dental").unwrap();
        assert!(wizard.handle_next());
        let summary = wizard.handle_submit(today()).unwrap();
        assert_eq!(summary.service_label, Service::Dental.label());
        assert_eq!(wizard.summary(), Some(summary));
    }

    #[test]
    fn test_submit_sends_bad_contact_back_to_step_one() {
        let mut wizard = at_schedule();
        wizard.update_field(FormField::Email, "sin-arroba").unwrap();
        wizard.update_field(FormField::Date, "2026-10-20").unwrap();
        wizard.update_field(FormField::Time, "09:00").unwrap();

        assert!(wizard.handle_submit(today()).is_none());
        assert_eq!(wizard.step(), WizardStep::Contact);
        assert_eq!(wizard.errors().get(FormField::Email), Some(FieldError::MalformedEmail));
        assert!(!wizard.is_submitted());
    }

    #[test]
    fn test_submitted_is_terminal() {
        let mut wizard = at_schedule();
        wizard.update_field(FormField::Date, "2026-10-19").unwrap();
        wizard.update_field(FormField::Time, "09:00").unwrap();
        assert!(wizard.handle_submit(today()).is_some());

        assert!(!wizard.handle_back());
        assert!(!wizard.handle_next());
        assert!(wizard.handle_submit(today()).is_none());
        assert_eq!(wizard.step(), WizardStep::Submitted);
        assert_eq!(wizard.step().number(), 4);
    }

    #[test]
    fn test_submit_from_earlier_step_is_noop() {
        let mut wizard = AppointmentWizard::new();
        fill_contact(&mut wizard);
        assert!(wizard.handle_submit(today()).is_none());
        assert_eq!(wizard.step(), WizardStep::Contact);
    }

    #[test]
    fn test_reset() {
        let mut wizard = at_schedule();
        wizard.update_field(FormField::Notes, "Alergia a la penicilina").unwrap();
        wizard.reset();

        assert_eq!(wizard, AppointmentWizard::new());
        assert_eq!(wizard.step().number(), 1);
    }

    #[test]
    fn test_long_date_es() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(long_date_es(date(2026, 1, 1)), "jueves, 1 de enero de 2026");
        assert_eq!(long_date_es(date(2026, 10, 25)), "domingo, 25 de octubre de 2026");
        assert_eq!(long_date_es(date(2026, 12, 19)), "sábado, 19 de diciembre de 2026");
    }

    #[test]
    fn test_form_field_names() {
        assert_eq!("petName".parse::<FormField>().unwrap(), FormField::PetName);
        assert!("pet_name".parse::<FormField>().is_err());

        let json = serde_json::to_string(&FormField::OwnerName).unwrap();
        assert_eq!(json, "\"ownerName\"");
    }

    #[test]
    fn test_errors_serialize_as_map() {
        let mut wizard = AppointmentWizard::new();
        wizard.handle_next();
        let json = serde_json::to_value(wizard.errors()).unwrap();
        assert_eq!(json["ownerName"], "required");
        assert_eq!(json["email"], "required");
    }
}
