//! # Validation Module
//!
//! Input validation rules for the appointment form and the catalog data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI host                                                      │
//! │  ├── Input types, date picker min = today                              │
//! │  └── Immediate feedback while typing                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Wizard step guard (appointment.rs)                           │
//! │  └── THIS MODULE: required / email / date rules → FieldError           │
//! │                                                                         │
//! │  Catalog load (catalog.rs)                                             │
//! │  └── THIS MODULE: name, price, rating sanity → ValidationError         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use clinivet_core::validation::{validate_email, validate_required};
//! use clinivet_core::FieldError;
//!
//! assert!(validate_required("Ana").is_ok());
//! assert_eq!(validate_required("   "), Err(FieldError::Required));
//! assert_eq!(validate_email("ana@"), Err(FieldError::MalformedEmail));
//! ```

use chrono::NaiveDate;

use crate::error::{FieldError, ValidationError};
use crate::money::Money;

/// Result type for catalog validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Form Field Validators
// =============================================================================

/// A required field must contain something other than whitespace.
pub fn validate_required(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }
    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Required
/// - Shape `local@domain.tld`: exactly one `@`, no whitespace anywhere,
///   non-empty local part, and a `.` inside the domain with characters on
///   both sides of it
///
/// ## Example
/// ```rust
/// use clinivet_core::validation::validate_email;
///
/// assert!(validate_email("dueño@clinivet.pe").is_ok());
/// assert!(validate_email("sin-arroba.pe").is_err());
/// assert!(validate_email("a@b").is_err());
/// assert!(validate_email("a b@c.d").is_err());
/// ```
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    validate_required(value)?;

    if value.chars().any(char::is_whitespace) {
        return Err(FieldError::MalformedEmail);
    }

    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(FieldError::MalformedEmail),
    };

    if local.is_empty() {
        return Err(FieldError::MalformedEmail);
    }

    // Some '.' must have at least one character before and after it.
    let has_inner_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if !has_inner_dot {
        return Err(FieldError::MalformedEmail);
    }

    Ok(())
}

/// Validates an appointment date.
///
/// ## Rules
/// - Required
/// - Format `YYYY-MM-DD` (what the date picker produces)
/// - Not before `today`
///
/// ## Returns
/// The parsed date.
pub fn validate_appointment_date(value: &str, today: NaiveDate) -> Result<NaiveDate, FieldError> {
    validate_required(value)?;

    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| FieldError::MalformedDate)?;

    if date < today {
        return Err(FieldError::PastDate);
    }

    Ok(date)
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 200 {
        return Err(ValidationError::OutOfRange {
            field: "name length".to_string(),
            min: 1,
            max: 200,
        });
    }

    Ok(())
}

/// Validates a price. Zero is allowed (free samples), negatives are not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a star rating (0.0 - 5.0).
pub fn validate_rating(rating: f32) -> ValidationResult<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: 5,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("Rocky").is_ok());
        assert_eq!(validate_required(""), Err(FieldError::Required));
        assert_eq!(validate_required(" \t "), Err(FieldError::Required));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ana@clinivet.pe").is_ok());
        assert!(validate_email("a.b+c@mail.example.com").is_ok());

        assert_eq!(validate_email(""), Err(FieldError::Required));
        assert_eq!(validate_email("ana"), Err(FieldError::MalformedEmail));
        assert_eq!(validate_email("@clinivet.pe"), Err(FieldError::MalformedEmail));
        assert_eq!(validate_email("ana@clinivet"), Err(FieldError::MalformedEmail));
        assert_eq!(validate_email("ana@.pe"), Err(FieldError::MalformedEmail));
        assert_eq!(validate_email("ana@clinivet."), Err(FieldError::MalformedEmail));
        assert_eq!(validate_email("ana@@clinivet.pe"), Err(FieldError::MalformedEmail));
        assert_eq!(validate_email("ana @clinivet.pe"), Err(FieldError::MalformedEmail));
    }

    #[test]
    fn test_validate_appointment_date() {
        let today = day(2026, 10, 19);

        assert_eq!(validate_appointment_date("2026-10-19", today), Ok(today));
        assert_eq!(
            validate_appointment_date("2026-10-20", today),
            Ok(day(2026, 10, 20))
        );
        assert_eq!(
            validate_appointment_date("2026-10-18", today),
            Err(FieldError::PastDate)
        );
        assert_eq!(
            validate_appointment_date("19/10/2026", today),
            Err(FieldError::MalformedDate)
        );
        assert_eq!(validate_appointment_date("", today), Err(FieldError::Required));
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Croquetas Premium 15kg").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_price_and_rating() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());

        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(5.0).is_ok());
        assert!(validate_rating(5.1).is_err());
        assert!(validate_rating(f32::NAN).is_err());
    }
}
