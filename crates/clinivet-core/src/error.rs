//! # Error Types
//!
//! Domain-specific error types for clinivet-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  clinivet-core errors (this file)                                      │
//! │  ├── CoreError        - Catalog / parsing failures                     │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  └── FieldError       - Per-field wizard errors (data, not Err)        │
//! │                                                                         │
//! │  clinivet-db errors (separate crate)                                   │
//! │  └── DbError          - Persistence failures                           │
//! │                                                                         │
//! │  apps/site errors                                                      │
//! │  └── ApiError         - What the UI host sees (serialized)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart and modal operations have no error type at all: they are total.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::appointment::FormField;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The embedded catalog could not be parsed.
    #[error("Catalog data is malformed: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Two catalog entries share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(u32),

    /// Product cannot be found.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for catalog integrity checks and for parsing enumerated values
/// coming from the UI host.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., invalid email, invalid date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    pub(crate) fn not_allowed(field: &str, allowed: &[&str]) -> Self {
        ValidationError::NotAllowed {
            field: field.to_string(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// =============================================================================
// Field Error
// =============================================================================

/// A wizard field error, shown inline next to the offending input.
///
/// These are never returned as `Err`; the wizard stores them in its
/// error map and refuses to advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    /// Required field missing (empty or whitespace only).
    Required,
    /// Email does not match `local@domain.tld`.
    MalformedEmail,
    /// Date is not `YYYY-MM-DD`.
    MalformedDate,
    /// Date lies before today.
    PastDate,
    /// Value is not one of the offered options.
    InvalidChoice,
}

impl FieldError {
    /// The inline message shown for this error on `field`.
    pub fn message(&self, field: FormField) -> &'static str {
        match (self, field) {
            (FieldError::Required, FormField::OwnerName) => "Nombre requerido",
            (FieldError::Required, FormField::Phone) => "Teléfono requerido",
            (FieldError::Required, FormField::Email) => "Email requerido",
            (FieldError::Required, FormField::PetName) => "Nombre de mascota requerido",
            (FieldError::Required, FormField::Service) => "Selecciona un servicio",
            (FieldError::Required, FormField::Date) => "Selecciona una fecha",
            (FieldError::Required, FormField::Time) => "Selecciona un horario",
            (FieldError::Required, _) => "Campo requerido",
            (FieldError::MalformedEmail, _) => "Email inválido",
            (FieldError::MalformedDate, _) => "Fecha inválida",
            (FieldError::PastDate, _) => "La fecha no puede ser anterior a hoy",
            (FieldError::InvalidChoice, _) => "Opción no válida",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::not_allowed("category", &["alimentos", "higiene"]);
        assert_eq!(
            err.to_string(),
            "category must be one of: [\"alimentos\", \"higiene\"]"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_field_error_messages() {
        assert_eq!(
            FieldError::Required.message(FormField::OwnerName),
            "Nombre requerido"
        );
        assert_eq!(
            FieldError::Required.message(FormField::Service),
            "Selecciona un servicio"
        );
        assert_eq!(
            FieldError::MalformedEmail.message(FormField::Email),
            "Email inválido"
        );
    }
}
