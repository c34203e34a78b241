//! # Command Implementations
//!
//! Each command turns parsed arguments plus the loaded [`HesabConfig`] into
//! the text that `main` prints. All calculation is delegated to hesab-core.
//!
//! ```text
//! Cli ──► run() ──┬── words   ──► words_for
//!                 ├── vat     ──► CalculationRecord::new
//!                 └── convert ──► ExchangeRates::convert + money_in_words
//! ```

use hesab_core::history::CalculationRecord;
use hesab_core::validation::{parse_amount, validate_vat_rate_bps};
use hesab_core::words::money_in_words;
use hesab_core::{words_for, CurrencyCode, Language, Money, ValidationError, VatMode, VatRate};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{Cli, Commands, ConvertArgs, VatArgs, WordsArgs};
use crate::config::HesabConfig;
use crate::error::CliResult;

/// JSON output of `hesab words`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WordsOutput<'a> {
    amount: f64,
    currency: CurrencyCode,
    language: Language,
    words: &'a str,
}

/// JSON output of `hesab convert`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConvertOutput<'a> {
    from: CurrencyCode,
    to: CurrencyCode,
    amount: Money,
    converted: Money,
    rate: f64,
    words: &'a str,
}

/// Runs the selected command and returns its output.
pub fn run(cli: &Cli, config: &HesabConfig) -> CliResult<String> {
    let language = match &cli.lang {
        Some(tag) => tag.parse()?,
        None => config.display.language,
    };
    debug!(%language, json = cli.json, "Running command");

    match &cli.command {
        Commands::Words(args) => run_words(args, language, cli.json, config),
        Commands::Vat(args) => run_vat(args, language, cli.json, config),
        Commands::Convert(args) => run_convert(args, language, cli.json, config),
    }
}

/// Parses an optional currency flag, falling back to `default`.
fn currency_or(value: Option<&str>, default: CurrencyCode) -> CliResult<CurrencyCode> {
    match value {
        Some(code) => Ok(code.parse()?),
        None => Ok(default),
    }
}

/// Run `hesab words`.
fn run_words(args: &WordsArgs, language: Language, json: bool, config: &HesabConfig) -> CliResult<String> {
    let amount = parse_amount(&args.amount)?;
    let currency = currency_or(args.currency.as_deref(), config.display.currency)?;
    let words = words_for(amount, currency, language)?;
    info!(amount, %currency, %language, "Rendered amount in words");

    if json {
        let output = WordsOutput {
            amount,
            currency,
            language,
            words: &words,
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    Ok(words)
}

/// Run `hesab vat`.
fn run_vat(args: &VatArgs, language: Language, json: bool, config: &HesabConfig) -> CliResult<String> {
    let amount = Money::from_amount(parse_amount(&args.amount)?)?;
    let currency = currency_or(args.currency.as_deref(), config.display.currency)?;
    let target = args
        .target
        .as_deref()
        .map(str::parse::<CurrencyCode>)
        .transpose()?;

    let rate = match args.rate {
        Some(percent) => vat_rate_from_flag(percent)?,
        None => config.vat_rate()?,
    };

    let mode = if args.includes_vat {
        VatMode::Included
    } else if args.excludes_vat {
        VatMode::Excluded
    } else {
        config.vat.mode
    };

    let record = CalculationRecord::new(
        amount,
        currency,
        rate,
        mode,
        language,
        target,
        &config.exchange_rates()?,
    )?;
    info!(id = %record.id, %amount, %currency, ?mode, "VAT calculated");

    if json {
        return Ok(serde_json::to_string_pretty(&record)?);
    }

    let mut lines = vec![
        format!("Amount without VAT: {} {}", record.without_vat, currency),
        format!("VAT ({}%): {} {}", rate.percentage(), record.vat_amount, currency),
        format!("Amount with VAT: {} {}", record.with_vat, currency),
    ];
    if let Some(converted) = &record.converted {
        lines.push(format!("Converted amount: {} {}", converted.amount, converted.currency));
    }
    lines.push(format!("In words: {}", record.amount_in_words));
    Ok(lines.join("\n"))
}

/// Validates a `--rate` flag given in percent.
fn vat_rate_from_flag(percent: f64) -> CliResult<VatRate> {
    if !percent.is_finite() || percent < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "vat_rate".to_string(),
            min: 0,
            max: 100,
        }
        .into());
    }

    let rate = VatRate::from_percentage(percent);
    validate_vat_rate_bps(rate.bps())?;
    Ok(rate)
}

/// Run `hesab convert`.
fn run_convert(args: &ConvertArgs, language: Language, json: bool, config: &HesabConfig) -> CliResult<String> {
    let amount = Money::from_amount(parse_amount(&args.amount)?)?;
    let from = currency_or(args.from.as_deref(), config.display.currency)?;
    let to: CurrencyCode = args.to.parse()?;

    let rates = config.exchange_rates()?;
    let converted = rates.convert(amount, from, to)?;
    let words = money_in_words(converted, to, language)?;
    info!(%amount, %from, %converted, %to, "Converted amount");

    if json {
        let output = ConvertOutput {
            from,
            to,
            amount,
            converted,
            rate: rates.rate(from) / rates.rate(to),
            words: &words,
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    Ok(format!("{} {}\n{}", converted, to, words))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::error::CliError;

    fn run_args(args: &[&str]) -> CliResult<String> {
        let cli = Cli::try_parse_from(std::iter::once("hesab").chain(args.iter().copied()))
            .expect("arguments should parse");
        run(&cli, &HesabConfig::default())
    }

    #[test]
    fn test_words_defaults_to_azerbaijani_manat() {
        assert_eq!(run_args(&["words", "21"]).unwrap(), "iyirmi bir manat");
    }

    #[test]
    fn test_words_with_flags() {
        assert_eq!(
            run_args(&["words", "1 250,75", "--currency", "usd", "--lang", "en"]).unwrap(),
            "one thousand two hundred fifty dollars seventy five cents"
        );
    }

    #[test]
    fn test_words_json() {
        let out = run_args(&["words", "15", "--lang", "ru", "--json"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["words"], "пятнадцать манат");
        assert_eq!(json["currency"], "AZN");
        assert_eq!(json["language"], "ru");
    }

    #[test]
    fn test_bad_input_is_reported() {
        assert!(matches!(run_args(&["words", "abc"]), Err(CliError::Core(_))));
        assert!(matches!(run_args(&["words", "-5"]), Err(CliError::Core(_))));
        assert!(matches!(
            run_args(&["words", "5", "--currency", "GBP"]),
            Err(CliError::Core(_))
        ));
        assert!(matches!(run_args(&["words", "5", "--lang", "de"]), Err(CliError::Core(_))));
    }

    #[test]
    fn test_vat_included_by_default() {
        let out = run_args(&["vat", "118", "--lang", "en"]).unwrap();
        assert_eq!(
            out,
            "Amount without VAT: 100.00 AZN\n\
             VAT (18%): 18.00 AZN\n\
             Amount with VAT: 118.00 AZN\n\
             In words: one hundred ten eight manat"
        );
    }

    #[test]
    fn test_vat_excluded_with_conversion() {
        let out = run_args(&[
            "vat", "100", "--excludes-vat", "--rate", "20", "--target", "USD", "--lang", "az",
        ])
        .unwrap();
        assert!(out.contains("Amount with VAT: 120.00 AZN"));
        assert!(out.contains("Converted amount: 58.82 USD"));
        assert!(out.ends_with("In words: bir yüz iyirmi manat"));
    }

    #[test]
    fn test_vat_json_is_a_record() {
        let out = run_args(&["vat", "50", "--excludes-vat", "--json"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["withVat"], 5_900);
        assert_eq!(json["vatMode"], "excluded");
        assert!(json["id"].is_string());
    }

    #[test]
    fn test_vat_rejects_bad_rate() {
        assert!(run_args(&["vat", "100", "--rate", "150"]).is_err());
        assert!(run_args(&["vat", "100", "--rate=-1"]).is_err());
    }

    #[test]
    fn test_vat_overflow_is_reported() {
        let err = run_args(&["vat", "90000000000000000", "--excludes-vat", "--lang", "en"]).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
        assert_eq!(err.exit_code(), exitcode::DATAERR);
    }

    #[test]
    fn test_convert_overflow_is_reported() {
        let err = run_args(&["convert", "10000000000000000", "--from", "USD", "--to", "RUB"]).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
        assert!(err.to_string().contains("amount must be between 0 and 92233720368547758"));
    }

    #[test]
    fn test_convert() {
        assert_eq!(
            run_args(&["convert", "100", "--from", "USD", "--to", "AZN", "--lang", "en"]).unwrap(),
            "170.00 AZN\none hundred seventy manat"
        );
    }

    #[test]
    fn test_convert_json() {
        let out = run_args(&["convert", "100", "--to", "EUR", "--json"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["from"], "AZN");
        assert_eq!(json["to"], "EUR");
        assert_eq!(json["converted"], 5_405);
    }
}
