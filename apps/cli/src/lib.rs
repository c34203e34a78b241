//! # Hesab CLI
//!
//! Argument parsing, configuration loading, and command dispatch for the
//! `hesab` binary. Kept as a library so commands can be tested without
//! spawning a process.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use config::HesabConfig;
pub use error::{CliError, CliResult};
