//! # hesab-core: Pure Business Logic for Hesab
//!
//! This crate is the **heart** of the Hesab calculator suite. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Hesab Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Browser calculator  /  hesab CLI                   │   │
//! │  │    VAT page ──► History list ──► "Show in words" annotation    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ amount, currency, language             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hesab-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   words   │  │   money   │  │    vat    │  │  history  │  │   │
//! │  │   │ words_for │  │   Money   │  │ calculate │  │  Record   │  │   │
//! │  │   │ groups    │  │ rounding  │  │ exchange  │  │  History  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`words`] - Amount in words (az / ru / en)
//! - [`money`] - Money type with integer arithmetic and one explicit rounding rule
//! - [`vat`] - VAT included / excluded breakdown
//! - [`exchange`] - Fixed-rate currency conversion
//! - [`history`] - Canonical calculation record and history list
//! - [`types`] - Language, currency, and VAT types
//! - [`error`] - Domain error types
//! - [`validation`] - Input parsing and validation
//!
//! ## Example Usage
//!
//! ```rust
//! use hesab_core::{words_for, CurrencyCode, Language};
//!
//! let text = words_for(2_534.3, CurrencyCode::Usd, Language::En).unwrap();
//! assert_eq!(text, "two thousand five hundred thirty four dollars thirty cents");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod exchange;
pub mod history;
pub mod money;
pub mod types;
pub mod validation;
pub mod vat;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use words::words_for;
