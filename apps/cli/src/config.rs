//! # CLI Configuration
//!
//! Defaults for language, currency, VAT, and exchange rates.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority)                              │
//! │     --lang ru --currency USD --rate 20                                  │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     HESAB_LANGUAGE=ru  HESAB_CURRENCY=USD  HESAB_VAT_RATE=20           │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config PATH, or                                                  │
//! │     ~/.config/hesab/hesab.toml (Linux)                                 │
//! │     ~/Library/Application Support/az.hesab.hesab/hesab.toml (macOS)    │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     az, AZN, 18% VAT included, built-in exchange rates                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [display]
//! language = "ru"
//! currency = "AZN"
//!
//! [vat]
//! rate_percent = 18.0
//! mode = "excluded"
//!
//! [rates]
//! USD = 1.70
//! EUR = 1.85
//! ```
//!
//! The loaded config is an explicit value handed to each command; nothing
//! is kept in global state.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use hesab_core::exchange::ExchangeRates;
use hesab_core::validation::validate_vat_rate_bps;
use hesab_core::{CurrencyCode, Language, VatMode, VatRate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Name of the config file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "hesab.toml";

// =============================================================================
// Display Settings
// =============================================================================

/// Default language and currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub currency: CurrencyCode,
}

// =============================================================================
// VAT Settings
// =============================================================================

/// Default VAT behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatSettings {
    /// Rate in percent, e.g. 18.0.
    #[serde(default = "default_rate_percent")]
    pub rate_percent: f64,

    /// Whether entered amounts include VAT.
    #[serde(default)]
    pub mode: VatMode,
}

fn default_rate_percent() -> f64 {
    VatRate::STANDARD.percentage()
}

impl Default for VatSettings {
    fn default() -> Self {
        VatSettings {
            rate_percent: default_rate_percent(),
            mode: VatMode::default(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HesabConfig {
    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub vat: VatSettings,

    /// Exchange rate overrides: currency code → AZN per unit.
    #[serde(default)]
    pub rates: BTreeMap<String, f64>,
}

impl HesabConfig {
    /// Loads configuration from file, process environment, and defaults.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        Self::load_with_env(config_path, |key| std::env::var(key).ok())
    }

    /// Loads configuration, reading environment variables through `env`.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    ///
    /// An explicitly given path must exist; the default path is optional.
    pub fn load_with_env<F>(config_path: Option<PathBuf>, env: F) -> CliResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides(env)?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> CliResult<()> {
        self.vat_rate()?;
        self.exchange_rates()?;
        Ok(())
    }

    /// Applies `HESAB_*` environment overrides.
    fn apply_env_overrides<F>(&mut self, env: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(language) = env("HESAB_LANGUAGE") {
            debug!(%language, "Overriding language from environment");
            self.display.language = language.parse()?;
        }

        if let Some(currency) = env("HESAB_CURRENCY") {
            debug!(%currency, "Overriding currency from environment");
            self.display.currency = currency.parse()?;
        }

        if let Some(rate) = env("HESAB_VAT_RATE") {
            debug!(%rate, "Overriding VAT rate from environment");
            self.vat.rate_percent = rate.trim().parse().map_err(|_| CliError::InvalidConfig {
                key: "HESAB_VAT_RATE".to_string(),
                reason: format!("'{}' is not a number", rate),
            })?;
        }

        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("az", "hesab", "hesab")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// The configured VAT rate.
    pub fn vat_rate(&self) -> CliResult<VatRate> {
        let percent = self.vat.rate_percent;
        let invalid = || CliError::InvalidConfig {
            key: "vat.rate_percent".to_string(),
            reason: format!("{} must be between 0 and 100", percent),
        };

        if !percent.is_finite() || percent < 0.0 {
            return Err(invalid());
        }

        let rate = VatRate::from_percentage(percent);
        validate_vat_rate_bps(rate.bps()).map_err(|_| invalid())?;
        Ok(rate)
    }

    /// Built-in exchange rates with the `[rates]` overrides applied.
    pub fn exchange_rates(&self) -> CliResult<ExchangeRates> {
        let mut rates = ExchangeRates::default();
        for (code, value) in &self.rates {
            let currency: CurrencyCode = code.parse()?;
            rates
                .set_rate(currency, *value)
                .map_err(|err| CliError::InvalidConfig {
                    key: format!("rates.{}", code),
                    reason: err.to_string(),
                })?;
        }
        Ok(rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HesabConfig::default();
        assert_eq!(config.display.language, Language::Az);
        assert_eq!(config.display.currency, CurrencyCode::Azn);
        assert_eq!(config.vat.mode, VatMode::Included);
        assert_eq!(config.vat_rate().unwrap(), VatRate::STANDARD);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = HesabConfig::default();
        config
            .apply_env_overrides(|key| match key {
                "HESAB_LANGUAGE" => Some("ru".to_string()),
                "HESAB_CURRENCY" => Some("usd".to_string()),
                "HESAB_VAT_RATE" => Some("20".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.display.language, Language::Ru);
        assert_eq!(config.display.currency, CurrencyCode::Usd);
        assert_eq!(config.vat_rate().unwrap().bps(), 2000);
    }

    #[test]
    fn test_unknown_env_values_fail() {
        let mut config = HesabConfig::default();
        let err = config
            .apply_env_overrides(|key| (key == "HESAB_LANGUAGE").then(|| "fr".to_string()))
            .unwrap_err();
        assert!(matches!(err, CliError::Core(_)));

        let err = config
            .apply_env_overrides(|key| (key == "HESAB_VAT_RATE").then(|| "lots".to_string()))
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidConfig { .. }));
    }

    #[test]
    fn test_config_validation() {
        let mut config = HesabConfig::default();
        config.vat.rate_percent = 150.0;
        assert!(config.validate().is_err());

        config.vat.rate_percent = -1.0;
        assert!(config.validate().is_err());

        config.vat.rate_percent = 10.0;
        config.rates.insert("GBP".to_string(), 2.1);
        assert!(config.validate().is_err());

        config.rates.clear();
        config.rates.insert("USD".to_string(), 0.0);
        assert!(config.validate().is_err());

        config.rates.insert("USD".to_string(), 1.72);
        assert!(config.validate().is_ok());
        assert_eq!(config.exchange_rates().unwrap().rate(CurrencyCode::Usd), 1.72);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = HesabConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[display]"));
        assert!(toml_str.contains("[vat]"));

        let parsed: HesabConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: HesabConfig = toml::from_str("[display]\nlanguage = \"en\"\n").unwrap();
        assert_eq!(config.display.language, Language::En);
        assert_eq!(config.display.currency, CurrencyCode::Azn);
        assert_eq!(config.vat, VatSettings::default());
        assert!(config.rates.is_empty());
    }
}
