//! # CLI Error Type
//!
//! Unified error type for `hesab` commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  hesab words abc                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_amount("abc") ─► ValidationError ─► CoreError ─► CliError::Core  │
//! │                                                            │            │
//! │                                                            ▼            │
//! │                               stderr: "error: Invalid input: …"         │
//! │                               exit code 65 (EX_DATAERR)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use hesab_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors surfaced by the command line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid amount, unknown language or currency, out-of-range value.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The config file exists but cannot be read.
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has the wrong shape.
    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A config value is present but unusable.
    #[error("Invalid config value for {key}: {reason}")]
    InvalidConfig { key: String, reason: String },

    /// Writing JSON output failed.
    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::Core(CoreError::InvalidInput(err))
    }
}

impl CliError {
    /// Process exit code for this error (sysexits.h).
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            CliError::Core(_) => exitcode::DATAERR,
            CliError::ConfigRead { .. } => exitcode::IOERR,
            CliError::ConfigParse(_) | CliError::InvalidConfig { .. } => exitcode::CONFIG,
            CliError::Json(_) => exitcode::SOFTWARE,
        }
    }
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;
