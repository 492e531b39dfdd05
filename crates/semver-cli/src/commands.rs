//! Subcommand implementations. Each returns the text to print on stdout.

use std::cmp::Ordering;

use semver_core::{Comparator, IdentifierOrdering, Version};
use tracing::debug;

use crate::cli::{self, Cli, Command};
use crate::error::{CliError, Result};

/// Dispatch the parsed command line.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Parse { input, json } => parse(input, cli.tolerant, *json),
        Command::Compare { a, b, natural } => {
            let ord = compare(a, b, cli.tolerant, cli::ordering(*natural))?;
            Ok(symbol(ord).to_owned())
        }
        Command::Sort { inputs, natural } => {
            let sorted = sort(inputs, cli.tolerant, cli::ordering(*natural))?;
            Ok(sorted
                .iter()
                .map(Version::to_string)
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}

/// Validate `input` and render it canonically, or as JSON fields.
pub fn parse(input: &str, tolerant: bool, json: bool) -> Result<String> {
    let version = read(input, tolerant)?;
    if json {
        Ok(serde_json::to_string_pretty(&version)?)
    } else {
        Ok(version.to_string())
    }
}

/// Precedence of `a` relative to `b`.
pub fn compare(a: &str, b: &str, tolerant: bool, ordering: IdentifierOrdering) -> Result<Ordering> {
    let a = read(a, tolerant)?;
    let b = read(b, tolerant)?;
    let ord = Comparator::new(ordering).compare(&a, &b);
    debug!(%a, %b, ?ordering, result = symbol(ord), "compared versions");
    Ok(ord)
}

/// Parse every input and sort by precedence. Fails on the first invalid one.
pub fn sort(inputs: &[String], tolerant: bool, ordering: IdentifierOrdering) -> Result<Vec<Version>> {
    let mut versions = inputs
        .iter()
        .map(|input| read(input, tolerant))
        .collect::<Result<Vec<_>>>()?;
    debug!(count = versions.len(), ?ordering, "sorting versions");
    Comparator::new(ordering).sort(&mut versions);
    Ok(versions)
}

fn read(input: &str, tolerant: bool) -> Result<Version> {
    let parsed = if tolerant {
        Version::parse_tolerant(input)
    } else {
        Version::parse(input)
    };
    parsed.map_err(|source| CliError::InvalidVersion {
        input: input.to_owned(),
        source,
    })
}

fn symbol(ord: Ordering) -> &'static str {
    match ord {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}
