//! # Validation Module
//!
//! Input validation utilities for Hesab.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end (browser form / CLI argument)                      │
//! │  ├── Raw text from the user                                            │
//! │  └── parse_amount() ← THIS MODULE                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Core operations                                              │
//! │  ├── validate_amount() ← THIS MODULE (finite, non-negative)            │
//! │  └── Money::from_amount() range check                                  │
//! │                                                                         │
//! │  Every failure is reported; nothing is coerced to zero                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hesab_core::validation::{parse_amount, validate_amount};
//!
//! let amount = parse_amount("1 250,75").unwrap();
//! assert_eq!(amount, 1250.75);
//! assert!(validate_amount(amount).is_ok());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Highest VAT rate accepted, in basis points (100%).
pub const MAX_VAT_RATE_BPS: u32 = 10_000;

// =============================================================================
// Amount Validators
// =============================================================================

/// Parses an amount typed by the user.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Spaces (including no-break spaces) inside the number are digit grouping
/// - A single comma is accepted as the decimal separator (`12,50`)
/// - The result must pass [`validate_amount`]
///
/// ## Example
/// ```rust
/// use hesab_core::validation::parse_amount;
///
/// assert_eq!(parse_amount("12,50").unwrap(), 12.5);
/// assert!(parse_amount("").is_err());
/// assert!(parse_amount("abc").is_err());
/// assert!(parse_amount("-3").is_err());
/// ```
pub fn parse_amount(input: &str) -> ValidationResult<f64> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "amount".to_string(),
        });
    }

    let mut normalized: String = input
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\u{202f}'))
        .collect();

    if !normalized.contains('.') && normalized.matches(',').count() == 1 {
        normalized = normalized.replace(',', ".");
    }

    let amount: f64 = normalized
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: format!("'{}' is not a number", input),
        })?;

    validate_amount(amount)?;
    Ok(amount)
}

/// Validates a numeric amount.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be non-negative (zero is allowed)
pub fn validate_amount(amount: f64) -> ValidationResult<()> {
    if !amount.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "amount".to_string(),
        });
    }

    if amount < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Rate Validators
// =============================================================================

/// Validates a VAT rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_vat_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_VAT_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "vat_rate".to_string(),
            min: 0,
            max: u64::from(MAX_VAT_RATE_BPS),
        });
    }

    Ok(())
}

/// Validates an exchange rate (value of one unit in AZN).
///
/// ## Rules
/// - Must be finite and strictly positive
pub fn validate_exchange_rate(rate: f64) -> ValidationResult<()> {
    if !rate.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "exchange_rate".to_string(),
        });
    }

    if rate <= 0.0 {
        return Err(ValidationError::InvalidFormat {
            field: "exchange_rate".to_string(),
            reason: "must be greater than zero".to_string(),
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

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100").unwrap(), 100.0);
        assert_eq!(parse_amount("  12.34 ").unwrap(), 12.34);
        assert_eq!(parse_amount("12,34").unwrap(), 12.34);
        assert_eq!(parse_amount("1 000 000").unwrap(), 1_000_000.0);
        assert_eq!(parse_amount("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(matches!(
            parse_amount("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_amount("12.3.4"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_amount("1,2,3"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_amount("-5"),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
        assert!(matches!(
            parse_amount("NaN"),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            parse_amount("inf"),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(0.0).is_ok());
        assert!(validate_amount(1e12).is_ok());
        assert!(validate_amount(-0.01).is_err());
        assert!(validate_amount(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_vat_rate_bps() {
        assert!(validate_vat_rate_bps(0).is_ok());
        assert!(validate_vat_rate_bps(1800).is_ok());
        assert!(validate_vat_rate_bps(10000).is_ok());
        assert!(validate_vat_rate_bps(10001).is_err());
    }

    #[test]
    fn test_validate_exchange_rate() {
        assert!(validate_exchange_rate(1.7).is_ok());
        assert!(validate_exchange_rate(0.0).is_err());
        assert!(validate_exchange_rate(-1.0).is_err());
        assert!(validate_exchange_rate(f64::NAN).is_err());
    }
}
