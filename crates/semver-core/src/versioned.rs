//! Host types that carry a version.

use crate::version::Version;

/// Implemented by anything that can report which [`Version`] it is.
///
/// ```
/// use semver_core::{Version, Versioned};
///
/// struct Plugin {
///     name: &'static str,
/// }
///
/// impl Versioned for Plugin {
///     fn version(&self) -> Version {
///         Version::new(2, 1, 0)
///     }
/// }
///
/// let plugin = Plugin { name: "lint" };
/// assert_eq!(plugin.name, "lint");
/// assert!(plugin.version() > Version::new(2, 0, 9));
/// ```
pub trait Versioned {
    fn version(&self) -> Version;
}

impl Versioned for Version {
    fn version(&self) -> Version {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Component {
        release: &'static str,
    }

    impl Versioned for Component {
        fn version(&self) -> Version {
            Version::parse(self.release).unwrap_or_default()
        }
    }

    fn newest<T: Versioned>(items: &[T]) -> Option<Version> {
        items.iter().map(Versioned::version).max()
    }

    #[test]
    fn host_types_compare_through_their_version() {
        let components = [
            Component { release: "1.4.0" },
            Component { release: "1.10.0-rc.1" },
            Component { release: "1.9.2" },
        ];
        assert_eq!(newest(&components), Some(Version::parse("1.10.0-rc.1").unwrap()));
    }

    #[test]
    fn version_reports_itself() {
        let v = Version::parse("3.0.0+meta").unwrap();
        assert!(v.version().strict_eq(&v));
    }
}
