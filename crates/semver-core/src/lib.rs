//! Semantic Versioning 2.0.0 version values.
//!
//! - [`Version`]: validated, immutable `major.minor.patch[-pre][+build]`
//! - Strict string parsing and canonical formatting
//! - Precedence ordering, with a configurable [`Comparator`] for the
//!   alphanumeric identifier order
//! - Optional `serde` support (cargo feature `serde`, on by default)
//!
//! ```
//! use semver_core::Version;
//!
//! let rc: Version = "1.0.0-rc.1".parse().unwrap();
//! let release: Version = "1.0.0+build.5".parse().unwrap();
//! assert!(rc < release);
//! assert_eq!(release.to_string(), "1.0.0+build.5");
//! ```

pub mod error;
pub mod identifier;
pub mod parse;
pub mod precedence;
#[cfg(feature = "serde")]
mod serde;
pub mod version;
pub mod versioned;

pub use error::{Result, VersionError};
pub use identifier::IdentifierKind;
pub use precedence::{Comparator, IdentifierOrdering};
pub use version::Version;
pub use versioned::Versioned;
