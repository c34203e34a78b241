//! # Calculation History
//!
//! The one record shape for a finished VAT calculation, shared by the
//! history list, the clipboard export, and the CLI's JSON output.
//!
//! ## Record Lifecycle
//! ```text
//! User presses "Calculate"
//!      │
//!      ▼
//! CalculationRecord::new(amount, currency, rate, mode, …) ← THIS MODULE
//!      │   ├── vat::calculate           → without / vat / with
//!      │   ├── ExchangeRates::convert   → optional converted amount
//!      │   └── words::money_in_words    → amount-in-words annotation
//!      ▼
//! CalculationHistory::push  (newest first)
//!      │
//!      ▼
//! Front end renders / deletes / clears entries
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::exchange::ExchangeRates;
use crate::money::Money;
use crate::types::{CurrencyCode, Language, VatMode, VatRate};
use crate::vat;
use crate::words::money_in_words;

// =============================================================================
// Calculation Record
// =============================================================================

/// An amount expressed in another currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedAmount {
    pub currency: CurrencyCode,
    pub amount: Money,
}

/// A finished VAT calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// When the calculation was made.
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,

    /// The amount as entered.
    pub amount: Money,

    /// Currency of `amount` and of the VAT parts.
    pub currency: CurrencyCode,

    pub vat_rate: VatRate,

    /// Whether `amount` already contained VAT.
    pub vat_mode: VatMode,

    pub without_vat: Money,
    pub vat_amount: Money,
    pub with_vat: Money,

    /// `amount` converted to the target currency, when one was chosen.
    pub converted: Option<ConvertedAmount>,

    /// Language of `amount_in_words`.
    pub language: Language,

    /// `with_vat` rendered as words.
    pub amount_in_words: String,
}

impl CalculationRecord {
    /// Runs a VAT calculation and captures it as a record.
    ///
    /// `target` is the currency to convert `amount` into; `None` or the
    /// source currency itself skips conversion.
    ///
    /// ## Example
    /// ```rust
    /// use hesab_core::exchange::ExchangeRates;
    /// use hesab_core::history::CalculationRecord;
    /// use hesab_core::money::Money;
    /// use hesab_core::{CurrencyCode, Language, VatMode, VatRate};
    ///
    /// let record = CalculationRecord::new(
    ///     Money::from_minor(20_000),
    ///     CurrencyCode::Azn,
    ///     VatRate::STANDARD,
    ///     VatMode::Excluded,
    ///     Language::En,
    ///     None,
    ///     &ExchangeRates::default(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(record.with_vat.minor_units(), 23_600);
    /// assert_eq!(record.amount_in_words, "two hundred thirty six manat");
    /// ```
    pub fn new(
        amount: Money,
        currency: CurrencyCode,
        vat_rate: VatRate,
        vat_mode: VatMode,
        language: Language,
        target: Option<CurrencyCode>,
        rates: &ExchangeRates,
    ) -> CoreResult<Self> {
        let breakdown = vat::calculate(amount, vat_rate, vat_mode)?;
        let amount_in_words = money_in_words(breakdown.with_vat, currency, language)?;

        let converted = target
            .filter(|target| *target != currency)
            .map(|target| {
                rates.convert(amount, currency, target).map(|amount| ConvertedAmount {
                    currency: target,
                    amount,
                })
            })
            .transpose()?;

        let record = CalculationRecord {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            amount,
            currency,
            vat_rate,
            vat_mode,
            without_vat: breakdown.without_vat,
            vat_amount: breakdown.vat_amount,
            with_vat: breakdown.with_vat,
            converted,
            language,
            amount_in_words,
        };

        debug!(id = %record.id, %currency, with_vat = %record.with_vat, "calculation recorded");
        Ok(record)
    }

    /// Re-renders the amount-in-words annotation after a language switch.
    pub fn relocalize(&mut self, language: Language) -> CoreResult<()> {
        if language != self.language {
            self.amount_in_words = money_in_words(self.with_vat, self.currency, language)?;
            self.language = language;
        }
        Ok(())
    }
}

// =============================================================================
// Calculation History
// =============================================================================

/// Calculation records, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculationHistory {
    entries: Vec<CalculationRecord>,
}

impl CalculationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record at the front.
    pub fn push(&mut self, record: CalculationRecord) {
        self.entries.insert(0, record);
    }

    /// Removes the record with `id`, returning it if it existed.
    pub fn remove(&mut self, id: &str) -> Option<CalculationRecord> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &CalculationRecord> {
        self.entries.iter()
    }

    /// Re-renders every annotation in `language`.
    pub fn relocalize(&mut self, language: Language) -> CoreResult<()> {
        self.entries
            .iter_mut()
            .try_for_each(|entry| entry.relocalize(language))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
