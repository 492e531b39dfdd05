//! Error type for version construction.
//!
//! Every variant means the same thing to a caller: the input was not a valid
//! semantic version and no value was produced. The variants only exist so the
//! rejection can be logged and reported with a useful reason.

use thiserror::Error;

use crate::identifier::IdentifierKind;

/// Reasons a [`Version`](crate::Version) could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    // --- Numeric core ---
    #[error("invalid numeric core `{0}`: expected 1 to 3 dot-separated integers")]
    InvalidNumericCore(String),

    #[error("unexpected text `{0}` after the numeric core")]
    UnexpectedText(String),

    // --- Identifiers ---
    #[error("empty {kind} identifier")]
    EmptyIdentifier { kind: IdentifierKind },

    #[error("{kind} identifier `{identifier}` contains characters outside [0-9A-Za-z-]")]
    InvalidCharacter {
        kind: IdentifierKind,
        identifier: String,
    },

    #[error("numeric pre-release identifier `{0}` has a leading zero")]
    LeadingZero(String),
}

/// Result type alias using [`VersionError`].
pub type Result<T> = std::result::Result<T, VersionError>;
