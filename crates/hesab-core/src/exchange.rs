//! # Currency Conversion
//!
//! Fixed-rate conversion between the supported currencies.
//!
//! Rates are the value of one unit in AZN, stored as integer millionths so
//! conversion stays in integer arithmetic:
//!
//! ```text
//!   AZN  1.000000  →  1_000_000
//!   USD  1.700000  →  1_700_000
//!   EUR  1.850000  →  1_850_000
//!   RUB  0.019000  →     19_000
//!
//!   to_minor = round(from_minor × rate(from) / rate(to))
//! ```

use tracing::debug;

use crate::error::{CoreResult, ValidationError};
use crate::money::{amount_out_of_range, Money};
use crate::types::CurrencyCode;
use crate::validation::validate_exchange_rate;

const MICROS: f64 = 1_000_000.0;

/// A table of exchange rates against AZN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRates {
    micros: [u64; 4],
}

impl Default for ExchangeRates {
    /// The rates shipped with the calculator.
    fn default() -> Self {
        ExchangeRates {
            micros: [1_000_000, 1_700_000, 1_850_000, 19_000],
        }
    }
}

impl ExchangeRates {
    fn slot(currency: CurrencyCode) -> usize {
        match currency {
            CurrencyCode::Azn => 0,
            CurrencyCode::Usd => 1,
            CurrencyCode::Eur => 2,
            CurrencyCode::Rub => 3,
        }
    }

    /// Value of one unit of `currency` in AZN.
    pub fn rate(&self, currency: CurrencyCode) -> f64 {
        self.micros[Self::slot(currency)] as f64 / MICROS
    }

    /// Overrides the rate of `currency`, in AZN per unit.
    ///
    /// Rates are kept to six decimal places; a rate that rounds to zero
    /// is rejected.
    pub fn set_rate(&mut self, currency: CurrencyCode, azn_per_unit: f64) -> Result<(), ValidationError> {
        validate_exchange_rate(azn_per_unit)?;

        let micros = (azn_per_unit * MICROS).round();
        if micros < 1.0 || micros > u64::MAX as f64 {
            return Err(ValidationError::InvalidFormat {
                field: "exchange_rate".to_string(),
                reason: format!("{} for {} is outside the supported precision", azn_per_unit, currency),
            });
        }

        self.micros[Self::slot(currency)] = micros as u64;
        Ok(())
    }

    /// Builder form of [`set_rate`](Self::set_rate).
    pub fn with_rate(mut self, currency: CurrencyCode, azn_per_unit: f64) -> Result<Self, ValidationError> {
        self.set_rate(currency, azn_per_unit)?;
        Ok(self)
    }

    /// Converts `amount` from one currency to another, rounding half up.
    ///
    /// Fails with `OutOfRange` when the converted value does not fit into
    /// a [`Money`].
    ///
    /// ## Example
    /// ```rust
    /// use hesab_core::exchange::ExchangeRates;
    /// use hesab_core::money::Money;
    /// use hesab_core::CurrencyCode;
    ///
    /// let rates = ExchangeRates::default();
    /// let azn = rates
    ///     .convert(Money::from_minor(10_000), CurrencyCode::Usd, CurrencyCode::Azn)
    ///     .unwrap();
    /// assert_eq!(azn.minor_units(), 17_000);
    /// ```
    pub fn convert(&self, amount: Money, from: CurrencyCode, to: CurrencyCode) -> CoreResult<Money> {
        if from == to {
            return Ok(amount);
        }

        let numerator = i128::from(amount.minor_units()) * i128::from(self.micros[Self::slot(from)]);
        let denominator = i128::from(self.micros[Self::slot(to)]);
        let half = denominator / 2;
        let converted = if numerator < 0 {
            (numerator - half) / denominator
        } else {
            (numerator + half) / denominator
        };

        let converted = i64::try_from(converted)
            .map(Money::from_minor)
            .map_err(|_| amount_out_of_range())?;
        debug!(%from, %to, %amount, %converted, "converted amount");
        Ok(converted)
    }
}
