//! # Error Types
//!
//! Domain-specific error types for hesab-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hesab-core errors (this file)                                         │
//! │  ├── CoreError        - What callers of the core see                   │
//! │  │   ├── InvalidInput       (wraps ValidationError)                    │
//! │  │   └── UnsupportedOption  (unknown language / currency tag)          │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  hesab-cli errors (separate crate)                                     │
//! │  └── CliError         - Config, I/O, and core failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → exit code              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, offending value)
//! 3. Errors are enum variants, never String
//! 4. Bad input fails loudly; nothing silently falls back to a default

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by the public operations of the core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The amount (or another numeric input) cannot be processed.
    ///
    /// ## When This Occurs
    /// - Negative amount
    /// - NaN or infinity
    /// - Text that does not parse as a number
    /// - Whole part beyond the trillion scale tier
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// A language or currency tag outside the supported set.
    ///
    /// ## User Workflow
    /// ```text
    /// hesab words 12.50 --lang de
    ///      │
    ///      ▼
    /// "de".parse::<Language>()
    ///      │
    ///      ▼
    /// UnsupportedOption { kind: "language", value: "de", allowed: [az, ru, en] }
    /// ```
    #[error("Unsupported {kind} '{value}', expected one of: {allowed:?}")]
    UnsupportedOption {
        kind: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value does not parse.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u64, max: u64 },
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
    fn test_error_messages() {
        let err = CoreError::UnsupportedOption {
            kind: "currency",
            value: "GBP".to_string(),
            allowed: vec!["AZN", "USD", "EUR", "RUB"],
        };
        assert_eq!(
            err.to_string(),
            "Unsupported currency 'GBP', expected one of: [\"AZN\", \"USD\", \"EUR\", \"RUB\"]"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBeNonNegative {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount must not be negative");

        let err = ValidationError::NotFinite {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount must be a finite number");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "amount".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidInput(_)));
        assert_eq!(core_err.to_string(), "Invalid input: amount is required");
    }
}
