//! Command-line front end for `semver-core`.
//!
//! - `semver parse <INPUT>`: canonical form, or the raw fields as JSON
//! - `semver compare <A> <B>`: prints `<`, `=` or `>` by precedence
//! - `semver sort <INPUT>...`: ascending precedence, one per line

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

pub use cli::Cli;
pub use error::CliError;
