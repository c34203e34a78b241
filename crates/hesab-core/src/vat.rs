//! # VAT Calculation
//!
//! Splits an amount into net, VAT, and gross parts.
//!
//! ## Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  VatMode::Excluded (amount is net)      VatMode::Included (amount is   │
//! │                                         gross)                          │
//! │                                                                         │
//! │  net   = amount                         gross = amount                  │
//! │  vat   = round(net × rate)              net   = round(gross / (1+rate)) │
//! │  gross = net + vat                      vat   = gross − net             │
//! │                                                                         │
//! │  100.00 @ 18% → 100.00 / 18.00 / 118.00                                │
//! │  118.00 @ 18% → 100.00 / 18.00 / 118.00                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All arithmetic is on minor units; the only rounding happens once per
//! call, half up, and `net + vat == gross` always holds. A gross amount
//! that does not fit into [`Money`] is an error.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::{amount_out_of_range, Money};
use crate::types::{VatMode, VatRate};

/// Result of a VAT calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VatBreakdown {
    /// Amount without VAT.
    pub without_vat: Money,
    /// The VAT portion.
    pub vat_amount: Money,
    /// Amount including VAT.
    pub with_vat: Money,
}

/// Calculates the VAT breakdown of `amount`.
///
/// ## Example
/// ```rust
/// use hesab_core::money::Money;
/// use hesab_core::vat::calculate;
/// use hesab_core::{VatMode, VatRate};
///
/// let result = calculate(Money::from_minor(11_800), VatRate::STANDARD, VatMode::Included).unwrap();
/// assert_eq!(result.without_vat.minor_units(), 10_000);
/// assert_eq!(result.vat_amount.minor_units(), 1_800);
/// ```
///
/// ## Errors
/// - `Excluded` mode where net + VAT overflows → `CoreError::InvalidInput`
pub fn calculate(amount: Money, rate: VatRate, mode: VatMode) -> CoreResult<VatBreakdown> {
    match mode {
        VatMode::Excluded => {
            let vat_amount = amount.percentage(rate.bps()).ok_or_else(amount_out_of_range)?;
            let with_vat = amount.checked_add(vat_amount).ok_or_else(amount_out_of_range)?;
            Ok(VatBreakdown {
                without_vat: amount,
                vat_amount,
                with_vat,
            })
        }
        VatMode::Included => {
            let divisor = 10_000 + i128::from(rate.bps());
            let net = (i128::from(amount.minor_units()) * 10_000 + divisor / 2) / divisor;
            let without_vat = i64::try_from(net)
                .map(Money::from_minor)
                .map_err(|_| amount_out_of_range())?;
            Ok(VatBreakdown {
                without_vat,
                vat_amount: amount - without_vat,
                with_vat: amount,
            })
        }
    }
}
