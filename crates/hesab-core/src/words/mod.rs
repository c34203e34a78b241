//! # Amount in Words
//!
//! Renders a monetary amount as words in Azerbaijani, Russian, or English.
//! The calculator shows this beneath every computed value and every history
//! entry.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  words_for(1234.56, AZN, en)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Money::from_amount ──► 1234 manat + 56 hundredths (rounded once)       │
//! │       │                                                                 │
//! │       ├── whole 1234 ──► spell_whole ──┬── group 234 ──► spell_group    │
//! │       │                                └── group 1 + "thousand"         │
//! │       │                  + major unit "manat"                           │
//! │       │                                                                 │
//! │       └── minor 56 ───► spell_whole + minor unit "cents"                │
//! │                                                                         │
//! │  "one thousand two hundred thirty four manat fifty six cents"           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is a pure function over `&'static` tables, safe to call
//! from any thread.

mod group;
mod lexicon;
mod scale;

pub use group::spell_group;
pub use lexicon::{lexicon, major_unit, Lexicon};
pub use scale::spell_whole;

use tracing::trace;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{CurrencyCode, Language};

/// Largest whole amount that can be spelled with the named scale tiers.
pub const MAX_SPELLED_WHOLE: u64 = 999_999_999_999_999;

/// Renders `amount` of `currency` as words in `language`.
///
/// ## Rules
/// - exactly `0` → "zero <major unit>" ("sıfır manat", "ноль манат")
/// - hundredths are rounded half up on the typed digits (`10.005` → `10.01`)
/// - the minor-unit phrase appears only when the hundredths are nonzero
/// - a nonzero amount that rounds to `0.00` (e.g. `0.001`) renders as `""`
///
/// ## Errors
/// - negative, NaN, infinite, or whole part ≥ 10^15 → `CoreError::InvalidInput`
///
/// ## Example
/// ```rust
/// use hesab_core::words::words_for;
/// use hesab_core::{CurrencyCode, Language};
///
/// assert_eq!(
///     words_for(21.5, CurrencyCode::Azn, Language::En).unwrap(),
///     "twenty one manat fifty cents"
/// );
/// assert_eq!(words_for(0.0, CurrencyCode::Usd, Language::Az).unwrap(), "sıfır dollar");
/// ```
pub fn words_for(amount: f64, currency: CurrencyCode, language: Language) -> CoreResult<String> {
    let money = Money::from_amount(amount)?;

    if money.is_zero() && amount != 0.0 {
        trace!(amount, "amount rounds to zero hundredths");
        return Ok(String::new());
    }

    money_in_words(money, currency, language)
}

/// Renders an already-rounded [`Money`] value as words.
///
/// Negative values are rendered by magnitude.
pub fn money_in_words(money: Money, currency: CurrencyCode, language: Language) -> CoreResult<String> {
    let lex = lexicon(language);
    let unit = major_unit(currency, language);

    if money.is_zero() {
        return Ok(format!("{} {}", lex.zero, unit));
    }

    let money = money.abs();
    let whole = money.major().unsigned_abs();
    let minor = money.minor().unsigned_abs();

    if whole > MAX_SPELLED_WHOLE {
        return Err(ValidationError::OutOfRange {
            field: "amount".to_string(),
            min: 0,
            max: MAX_SPELLED_WHOLE,
        }
        .into());
    }

    trace!(%currency, %language, whole, minor, "rendering amount in words");

    let mut phrases: Vec<String> = Vec::with_capacity(2);
    if whole > 0 {
        phrases.push(format!("{} {}", spell_whole(whole, language), unit));
    }
    if minor > 0 {
        phrases.push(format!("{} {}", spell_whole(minor, language), lex.minor_unit));
    }

    Ok(phrases.join(" ").trim().to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
