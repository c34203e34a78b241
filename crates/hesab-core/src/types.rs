//! # Domain Types
//!
//! Core domain types shared by every calculator page and the CLI.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Language     │   │  CurrencyCode   │   │    VatRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Az  "az"       │   │  Azn  "AZN"     │   │  bps (u32)      │       │
//! │  │  Ru  "ru"       │   │  Usd  "USD"     │   │  1800 = 18%     │       │
//! │  │  En  "en"       │   │  Eur  "EUR"     │   └─────────────────┘       │
//! │  └─────────────────┘   │  Rub  "RUB"     │   ┌─────────────────┐       │
//! │                        └─────────────────┘   │    VatMode      │       │
//! │                                              │  Included       │       │
//! │                                              │  Excluded       │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tags are parsed once at the edge (`"ru".parse::<Language>()`) and travel
//! through the core as enums, so an unknown tag can never reach the lookup
//! tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Language
// =============================================================================

/// UI and rendering language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Azerbaijani (the application default).
    #[default]
    Az,
    /// Russian.
    Ru,
    /// English.
    En,
}

impl Language {
    /// Every supported language, in menu order.
    pub const ALL: [Language; 3] = [Language::Az, Language::Ru, Language::En];

    /// The two-letter tag.
    pub const fn tag(&self) -> &'static str {
        match self {
            Language::Az => "az",
            Language::Ru => "ru",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "az" => Ok(Language::Az),
            "ru" => Ok(Language::Ru),
            "en" => Ok(Language::En),
            _ => Err(CoreError::UnsupportedOption {
                kind: "language",
                value: s.to_string(),
                allowed: Language::ALL.iter().map(Language::tag).collect(),
            }),
        }
    }
}

// =============================================================================
// Currency Code
// =============================================================================

/// ISO 4217 code of a supported currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    /// Azerbaijani manat.
    #[default]
    Azn,
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
    /// Russian ruble.
    Rub,
}

impl CurrencyCode {
    /// Every supported currency.
    pub const ALL: [CurrencyCode; 4] = [
        CurrencyCode::Azn,
        CurrencyCode::Usd,
        CurrencyCode::Eur,
        CurrencyCode::Rub,
    ];

    /// The ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            CurrencyCode::Azn => "AZN",
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Rub => "RUB",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AZN" => Ok(CurrencyCode::Azn),
            "USD" => Ok(CurrencyCode::Usd),
            "EUR" => Ok(CurrencyCode::Eur),
            "RUB" => Ok(CurrencyCode::Rub),
            _ => Err(CoreError::UnsupportedOption {
                kind: "currency",
                value: s.to_string(),
                allowed: CurrencyCode::ALL.iter().map(CurrencyCode::code).collect(),
            }),
        }
    }
}

// =============================================================================
// VAT Rate
// =============================================================================

/// VAT rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1800 bps = 18% (standard Azerbaijani VAT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VatRate(u32);

impl VatRate {
    /// Standard Azerbaijani VAT rate (18%).
    pub const STANDARD: VatRate = VatRate(1800);

    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        VatRate(bps)
    }

    /// Creates a rate from a percentage, e.g. `18.0` or `8.25`.
    pub fn from_percentage(pct: f64) -> Self {
        VatRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Default for VatRate {
    fn default() -> Self {
        VatRate::STANDARD
    }
}

// =============================================================================
// VAT Mode
// =============================================================================

/// Whether an entered amount already contains VAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum VatMode {
    /// The amount is the gross price; VAT is extracted from it.
    #[default]
    Included,
    /// The amount is the net price; VAT is added on top.
    Excluded,
}

// =============================================================================
// Unit Tests
// =============================================================================
