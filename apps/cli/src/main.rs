//! # Hesab
//!
//! Command line entry point.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         hesab startup                                   │
//! │                                                                         │
//! │  1. Parse arguments (clap)                                              │
//! │  2. Initialize tracing (RUST_LOG, or --verbose)                         │
//! │  3. Load config (defaults → hesab.toml → HESAB_* env)                   │
//! │  4. Run the command, print the result to stdout                         │
//! │  5. On error: message to stderr, sysexits exit code                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use hesab_cli::{commands, Cli, CliResult, HesabConfig};
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn execute(cli: &Cli) -> CliResult<String> {
    let config = HesabConfig::load(cli.config.clone())?;
    debug!(?config, "Configuration loaded");
    commands::run(cli, &config)
}

/// Logs go to stderr so stdout carries only command output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "hesab_cli=debug,hesab_core=debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
