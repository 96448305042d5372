//! CLI command implementations for Melee.

pub(crate) mod batch;
pub(crate) mod run;
pub(crate) mod validate;

mod output;

use clap::ValueEnum;
use std::error::Error;
use std::fmt;

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// The plain transcript.
    Text,
    /// Machine-readable JSON report.
    Json,
}

/// Output format for the `batch` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum BatchFormat {
    /// Human-readable text summary.
    Text,
    /// Machine-readable JSON output.
    Json,
    /// CSV format, one row per scenario.
    Csv,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<melee::ScenarioError> for CliError {
    fn from(e: melee::ScenarioError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<melee::SetupError> for CliError {
    fn from(e: melee::SetupError) -> Self {
        Self::new(e.to_string())
    }
}
