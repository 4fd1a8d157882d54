//! Error types for the Braid console.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// The main error type for console operations.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Grammar error: {0}")]
    Grammar(#[from] braid::Error),

    /// Some expressions given on the command line did not parse.
    #[error("{failed} of {total} expressions failed to parse")]
    Rejected { failed: usize, total: usize },
}
