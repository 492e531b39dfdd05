//! Argument definitions.

use clap::{ArgAction, Parser, Subcommand};
use semver_core::IdentifierOrdering;

/// Parse, compare and sort Semantic Versioning 2.0.0 versions.
#[derive(Debug, Parser)]
#[command(name = "semver", version)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Trim whitespace and a leading `v` before parsing.
    #[arg(long, global = true)]
    pub tolerant: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a version and print its canonical form.
    Parse {
        input: String,

        /// Print the raw fields as JSON instead.
        #[arg(long)]
        json: bool,
    },
    /// Compare two versions by precedence.
    Compare {
        a: String,
        b: String,

        /// Order digit runs inside identifiers by value (`rc9 < rc10`).
        #[arg(long)]
        natural: bool,
    },
    /// Sort versions into ascending precedence.
    Sort {
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Order digit runs inside identifiers by value (`rc9 < rc10`).
        #[arg(long)]
        natural: bool,
    },
}

/// Map the `--natural` flag onto an identifier ordering.
pub fn ordering(natural: bool) -> IdentifierOrdering {
    if natural {
        IdentifierOrdering::Natural
    } else {
        IdentifierOrdering::Lexical
    }
}
