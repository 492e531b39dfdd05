//! Error types for the command-line front end.

use semver_core::VersionError;
use thiserror::Error;

/// Errors reported by `semver` subcommands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid version {input:?}: {source}")]
    InvalidVersion {
        input: String,
        #[source]
        source: VersionError,
    },

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
