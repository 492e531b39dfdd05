//! Validation of pre-release and build-metadata identifiers.
//!
//! Both kinds of identifier are non-empty runs of `[0-9A-Za-z-]`. Numeric
//! pre-release identifiers additionally may not carry a leading zero (`0` on
//! its own is fine); build metadata has no such restriction.
//!
//! Character set reference: SemVer 2.0.0 items 9 and 10
//!   <https://semver.org/spec/v2.0.0.html>

use std::fmt;

use crate::error::{Result, VersionError};

/// Lookup table of bytes allowed inside an identifier, indexed by byte value.
static ALLOWED: [bool; 256] = allowed_table();

const fn allowed_table() -> [bool; 256] {
    let mut table = [false; 256];
    let mut b = 0;
    while b < 256 {
        let c = b as u8;
        table[b] = c.is_ascii_alphanumeric() || c == b'-';
        b += 1;
    }
    table
}

/// Which segment of a version an identifier list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// Dot-separated identifiers after the `-`. Participate in precedence.
    PreRelease,
    /// Dot-separated identifiers after the `+`. Ignored by precedence.
    BuildMetadata,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreRelease => f.write_str("pre-release"),
            Self::BuildMetadata => f.write_str("build-metadata"),
        }
    }
}

/// Returns `true` if `identifier` is made of ASCII digits only.
///
/// The empty string is not numeric.
pub fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if the identifier list is acceptable for `kind`.
///
/// `None` and an empty list are both valid. A single bad identifier makes
/// the whole list invalid.
pub fn validate(identifiers: Option<&[String]>, kind: IdentifierKind) -> bool {
    check(identifiers, kind).is_ok()
}

/// Like [`validate`], but reports the first offending identifier.
pub fn check(identifiers: Option<&[String]>, kind: IdentifierKind) -> Result<()> {
    let Some(identifiers) = identifiers else {
        return Ok(());
    };
    identifiers
        .iter()
        .try_for_each(|identifier| check_one(identifier, kind))
}

fn check_one(identifier: &str, kind: IdentifierKind) -> Result<()> {
    if identifier.is_empty() {
        return Err(VersionError::EmptyIdentifier { kind });
    }

    if !identifier.bytes().all(|b| ALLOWED[b as usize]) {
        return Err(VersionError::InvalidCharacter {
            kind,
            identifier: identifier.to_owned(),
        });
    }

    if kind == IdentifierKind::PreRelease
        && is_numeric(identifier)
        && identifier.len() > 1
        && identifier.starts_with('0')
    {
        return Err(VersionError::LeadingZero(identifier.to_owned()));
    }

    Ok(())
}
