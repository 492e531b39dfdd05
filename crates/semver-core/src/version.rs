//! The [`Version`] value object.
//!
//! A version is `major.minor.patch`, optionally followed by `-` and a
//! dot-separated pre-release list, optionally followed by `+` and a
//! dot-separated build-metadata list. Values are validated on construction
//! and immutable afterwards.
//!
//! Two equality relations exist and they differ on purpose:
//! - `==` (via [`PartialEq`]) is precedence equality and ignores build
//!   metadata, in agreement with [`Ord`].
//! - [`Version::strict_eq`] compares every field, including build metadata
//!   and whether an identifier list is absent or present-but-empty.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{Result, VersionError};
use crate::identifier::{self, IdentifierKind};
use crate::parse;
use crate::precedence::Comparator;

/// A Semantic Versioning 2.0.0 version.
///
/// The identifier lists are three-state: `None` (segment absent), `Some`
/// of an empty list (present but empty), or a populated list. The empty list
/// renders and counts as stable exactly like `None`, but it is kept distinct
/// and ranks below `None` in precedence.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<Vec<String>>,
    build_metadata: Option<Vec<String>>,
}

impl Version {
    /// `0.0.0` with no identifiers. Also what an empty string parses to.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Construct a version from its numeric core. Always succeeds.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
            build_metadata: None,
        }
    }

    /// Construct a version with pre-release identifiers.
    ///
    /// Fails if any identifier is empty, uses characters outside
    /// `[0-9A-Za-z-]`, or is numeric with a leading zero.
    pub fn with_pre_release(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<Vec<String>>,
    ) -> Result<Self> {
        Self::with_identifiers(major, minor, patch, pre_release, None)
    }

    /// Construct a version with pre-release and build-metadata identifiers.
    ///
    /// Build-metadata identifiers follow the same character rules as
    /// pre-release ones but may have leading zeros.
    pub fn with_identifiers(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<Vec<String>>,
        build_metadata: Option<Vec<String>>,
    ) -> Result<Self> {
        identifier::check(pre_release.as_deref(), IdentifierKind::PreRelease)?;
        identifier::check(build_metadata.as_deref(), IdentifierKind::BuildMetadata)?;

        Ok(Self {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        })
    }

    /// Parse a version string strictly.
    ///
    /// The empty string parses to [`Version::ZERO`]. One or two numeric
    /// components are accepted (`1` is `1.0.0`, `1.2` is `1.2.0`).
    pub fn parse(input: &str) -> Result<Self> {
        parse::parse(input)
    }

    /// Parse a version string after trimming surrounding whitespace and a
    /// single leading `v` or `V`.
    pub fn parse_tolerant(input: &str) -> Result<Self> {
        parse::parse_tolerant(input)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Pre-release identifiers, or `None` if the segment is absent.
    pub fn pre_release(&self) -> Option<&[String]> {
        self.pre_release.as_deref()
    }

    /// Build-metadata identifiers, or `None` if the segment is absent.
    pub fn build_metadata(&self) -> Option<&[String]> {
        self.build_metadata.as_deref()
    }

    /// Returns `true` if there is no pre-release, or the pre-release list is
    /// empty.
    pub fn is_stable(&self) -> bool {
        self.pre_release.as_ref().is_none_or(Vec::is_empty)
    }

    /// Field-level equality, the `===` counterpart of precedence `==`.
    ///
    /// Unlike `==`, build metadata must match, and an absent identifier list
    /// is not equal to an empty one.
    pub fn strict_eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
            && self.build_metadata == other.build_metadata
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = self.pre_release().filter(|ids| !ids.is_empty()) {
            write!(f, "-{}", pre.join("."))?;
        }
        if let Some(build) = self.build_metadata().filter(|ids| !ids.is_empty()) {
            write!(f, "+{}", build.join("."))?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::default().compare(self, other)
    }
}

// Build metadata is left out so that `a == b` implies equal hashes.
impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}
