//! # API Error Type
//!
//! Unified error type for site commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the site                               │
//! │                                                                         │
//! │  UI host                     Rust                                       │
//! │  ───────                     ────                                       │
//! │                                                                         │
//! │  add_to_cart({ productId: 99 })                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function  → Result<T, ApiError>                         │  │
//! │  │                                                                  │  │
//! │  │  CoreError::ProductNotFound ────────────┐                        │  │
//! │  │  ValidationError (bad "category") ──────┼──► ApiError ──────────►│  │
//! │  │  DbError (bootstrap only) ──────────────┤                        │  │
//! │  │  ConfigError (bootstrap only) ──────────┘                        │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "NOT_FOUND", "message": "Product not found: 99" }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Form mistakes are NOT errors here: the wizard reports them as a field
//! map inside a normal response.

use serde::Serialize;
use std::fmt;

use clinivet_core::{CoreError, ValidationError};
use clinivet_db::DbError;

use crate::state::ConfigError;

/// API error returned from site commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "category must be one of: [...]"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed (unknown category, modal kind, field name)
    ValidationError,

    /// Database operation failed
    DatabaseError,

    /// Configuration could not be loaded or is invalid
    ConfigError,

    /// Built-in data is broken
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, id),
            DbError::ConnectionFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) | DbError::Internal(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database operation failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::EmptyKey => ApiError::validation("Preference key must not be empty"),
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::Validation(e) => e.into(),
            CoreError::CatalogParse(e) => {
                tracing::error!("Built-in catalog is malformed: {}", e);
                ApiError::internal("Product catalog is unavailable")
            }
            CoreError::DuplicateProduct(id) => {
                tracing::error!(product_id = id, "Built-in catalog has a duplicate id");
                ApiError::internal("Product catalog is unavailable")
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("Product", 99);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 99");
    }

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::ProductNotFound(7).into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: ApiError = CoreError::DuplicateProduct(3).into();
        assert_eq!(err.code, ErrorCode::Internal);

        let validation = ValidationError::Required {
            field: "name".to_string(),
        };
        let err: ApiError = CoreError::Validation(validation).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_db_error_hides_details() {
        let err: ApiError = DbError::QueryFailed("no such table: preferences".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database operation failed");
    }

    #[test]
    fn test_display() {
        let err = ApiError::validation("bad");
        assert_eq!(err.to_string(), "[ValidationError] bad");
    }
}
