//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Amount-in-words, VAT, and currency tools.
#[derive(Debug, Parser)]
#[command(name = "hesab")]
#[command(about = "Amount-in-words, VAT, and currency tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: hesab.toml in the platform config directory)
    #[arg(long, global = true, env = "HESAB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output language: az, ru, en
    #[arg(short, long, global = true)]
    pub lang: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write an amount in words
    Words(WordsArgs),
    /// Split an amount into net, VAT, and gross parts
    Vat(VatArgs),
    /// Convert an amount between currencies
    Convert(ConvertArgs),
}

/// Arguments for `hesab words`.
#[derive(Debug, Args)]
pub struct WordsArgs {
    /// Amount, e.g. 1250.75 or "1 250,75"
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Currency: AZN, USD, EUR, RUB
    #[arg(short, long)]
    pub currency: Option<String>,
}

/// Arguments for `hesab vat`.
#[derive(Debug, Args)]
pub struct VatArgs {
    /// Amount, e.g. 118 or "1 180,00"
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// VAT rate in percent
    #[arg(short, long)]
    pub rate: Option<f64>,

    /// The amount already includes VAT
    #[arg(long, conflicts_with = "excludes_vat")]
    pub includes_vat: bool,

    /// The amount does not include VAT
    #[arg(long)]
    pub excludes_vat: bool,

    /// Currency of the amount: AZN, USD, EUR, RUB
    #[arg(short, long)]
    pub currency: Option<String>,

    /// Also convert the amount into this currency
    #[arg(short, long)]
    pub target: Option<String>,
}

/// Arguments for `hesab convert`.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Amount to convert
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Source currency (default: configured currency)
    #[arg(long)]
    pub from: Option<String>,

    /// Target currency
    #[arg(long)]
    pub to: String,
}
