//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The calculator form hands us an f64:                                   │
//! │    10.005 is stored as 10.00499999999999989...                         │
//! │    (10.005 - 10.0) * 100 = 0.4999999999...  → rounds DOWN  ❌          │
//! │                                                                         │
//! │  OUR SOLUTION: Round once, at the edge, on the decimal digits          │
//! │    10.005 → "10.005" → 1000 qəpik + round-half-up(5) = 1001 qəpik      │
//! │    Every calculation after that is integer arithmetic                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hesab_core::money::Money;
//!
//! let price = Money::from_minor(1099); // 10.99
//! let total = price + Money::from_minor(500);
//! assert_eq!(total.minor_units(), 1599);
//!
//! let typed = Money::from_amount(10.005).unwrap();
//! assert_eq!(typed.minor_units(), 1001);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::validate_amount;

/// Largest whole (major unit) value a `Money` can hold.
pub const MAX_MAJOR_UNITS: u64 = (i64::MAX / 100) as u64;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor units (qəpik, cents, kopecks).
///
/// ## Design Decisions
/// - **i64 (signed)**: VAT differences and refunds may be negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **No currency inside**: the currency travels next to the value, the
///   same way the calculator form keeps them in separate fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from a user-entered amount.
    ///
    /// ## Rounding Policy
    /// Rounds to hundredths **half away from zero on the shortest decimal
    /// representation** of the number, i.e. on the digits the user typed:
    ///
    /// ```text
    ///   10.004  → 10.00
    ///   10.005  → 10.01
    ///    0.995  →  1.00   (hundredths carry into the whole part)
    ///    0.001  →  0.00
    /// ```
    ///
    /// ## Errors
    /// - NaN / infinity → `NotFinite`
    /// - negative → `MustBeNonNegative`
    /// - whole part above [`MAX_MAJOR_UNITS`] → `OutOfRange`
    pub fn from_amount(amount: f64) -> Result<Self, ValidationError> {
        validate_amount(amount)?;

        // f64's Display is the shortest round-trip form and never uses an exponent
        let repr = amount.abs().to_string();
        let (whole, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

        let whole: i64 = whole.parse().map_err(|_| amount_out_of_range())?;

        let mut digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let thousandths = digits.next().unwrap_or(0);

        let mut minor = tenths * 10 + hundredths;
        if thousandths >= 5 {
            minor += 1;
        }

        whole
            .checked_mul(100)
            .and_then(|units| units.checked_add(minor))
            .map(Money)
            .ok_or_else(amount_out_of_range)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns the whole (major unit) portion, keeping the sign.
    ///
    /// ## Example
    /// ```rust
    /// use hesab_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(1099).major(), 10);
    /// assert_eq!(Money::from_minor(-550).major(), -5);
    /// ```
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Adds two values, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Money(sum)),
            None => None,
        }
    }

    /// Applies a rate in basis points, rounding half up.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`, in i128. Returns
    /// `None` when the result does not fit back into a `Money`.
    ///
    /// ## Example
    /// ```rust
    /// use hesab_core::money::Money;
    ///
    /// // 100.00 × 18% = 18.00
    /// assert_eq!(Money::from_minor(10_000).percentage(1800), Some(Money::from_minor(1800)));
    /// // 10.00 × 8.25% = 0.825 → 0.83
    /// assert_eq!(Money::from_minor(1000).percentage(825), Some(Money::from_minor(83)));
    /// ```
    pub fn percentage(&self, bps: u32) -> Option<Money> {
        let scaled = (i128::from(self.0) * i128::from(bps) + 5000) / 10000;
        i64::try_from(scaled).ok().map(Money)
    }
}

/// The error for an amount that does not fit into a [`Money`].
pub(crate) fn amount_out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "amount".to_string(),
        min: 0,
        max: MAX_MAJOR_UNITS,
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with two decimals and no currency, e.g. `1234.50`.
///
/// Currency placement and digit grouping are the front end's job.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(1099);
        assert_eq!(money.minor_units(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(1099).to_string(), "10.99");
        assert_eq!(Money::from_minor(500).to_string(), "5.00");
        assert_eq!(Money::from_minor(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_from_amount_exact() {
        assert_eq!(Money::from_amount(0.0).unwrap(), Money::zero());
        assert_eq!(Money::from_amount(12.5).unwrap().minor_units(), 1250);
        assert_eq!(Money::from_amount(1234.56).unwrap().minor_units(), 123_456);
        assert_eq!(Money::from_amount(7.0).unwrap().minor_units(), 700);
    }

    /// The half-way case is decided on decimal digits, not on the binary value.
    #[test]
    fn test_from_amount_rounds_half_up_on_decimal_digits() {
        assert_eq!(Money::from_amount(10.005).unwrap().minor_units(), 1001);
        assert_eq!(Money::from_amount(10.004).unwrap().minor_units(), 1000);
        assert_eq!(Money::from_amount(1.005).unwrap().minor_units(), 101);
        assert_eq!(Money::from_amount(2.675).unwrap().minor_units(), 268);
        assert_eq!(Money::from_amount(0.0049).unwrap().minor_units(), 0);
    }

    #[test]
    fn test_from_amount_carries_into_whole() {
        let money = Money::from_amount(0.995).unwrap();
        assert_eq!(money.major(), 1);
        assert_eq!(money.minor(), 0);

        let money = Money::from_amount(9.999).unwrap();
        assert_eq!(money.minor_units(), 1000);
    }

    #[test]
    fn test_from_amount_tiny_rounds_to_zero() {
        assert!(Money::from_amount(0.001).unwrap().is_zero());
        assert!(Money::from_amount(1e-9).unwrap().is_zero());
    }

    #[test]
    fn test_from_amount_rejects_bad_input() {
        assert!(matches!(
            Money::from_amount(-1.0),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
        assert!(matches!(
            Money::from_amount(f64::NAN),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            Money::from_amount(f64::INFINITY),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            Money::from_amount(1e20),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor_units(), 1500);
        assert_eq!((a - b).minor_units(), 500);
        assert_eq!(a.checked_add(b), Some(Money::from_minor(1500)));
        assert_eq!(Money::from_minor(i64::MAX).checked_add(Money::from_minor(1)), None);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        let pct = |minor: i64, bps: u32| Money::from_minor(minor).percentage(bps).unwrap().minor_units();
        assert_eq!(pct(1000, 1000), 100);
        assert_eq!(pct(1000, 825), 83);
        assert_eq!(pct(1, 1800), 0);
        assert_eq!(pct(3, 1800), 1);
    }

    #[test]
    fn test_percentage_overflow_is_none() {
        assert_eq!(Money::from_minor(i64::MAX).percentage(20_000), None);
        assert!(Money::from_minor(i64::MAX).percentage(10_000).is_some());
    }
}
