//! Precedence: the ordering between two versions.
//!
//! Precedence compares the numeric core first, then the pre-release
//! identifiers. Build metadata never takes part. Within a pre-release list
//! the rules are:
//!
//! - numeric identifiers compare by value,
//! - a numeric identifier is always lower than an alphanumeric one,
//! - alphanumeric identifiers compare by the configured
//!   [`IdentifierOrdering`],
//! - when every shared position is equal, the longer list is higher.
//!
//! A version without a pre-release outranks the same core with one.
//!
//! Reference: SemVer 2.0.0 item 11 <https://semver.org/spec/v2.0.0.html#spec-item-11>

use std::cmp::Ordering;

use crate::identifier::is_numeric;
use crate::version::Version;

/// How two alphanumeric pre-release identifiers are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IdentifierOrdering {
    /// Plain ASCII byte order, as SemVer 2.0.0 prescribes: `beta11 < beta2`.
    #[default]
    Lexical,
    /// Runs of digits inside an identifier compare by value:
    /// `beta2 < beta11`. Identifiers that are equal run-by-run fall back to
    /// lexical order, so distinct identifiers never compare equal.
    Natural,
}

/// Precedence comparator configured with an [`IdentifierOrdering`].
///
/// `Comparator::default()` is the strict SemVer ordering and is what the
/// `Ord` and `PartialEq` impls on [`Version`] use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Comparator {
    ordering: IdentifierOrdering,
}

impl Comparator {
    /// Create a comparator using the given identifier ordering.
    pub const fn new(ordering: IdentifierOrdering) -> Self {
        Self { ordering }
    }

    /// The identifier ordering this comparator applies.
    pub fn ordering(&self) -> IdentifierOrdering {
        self.ordering
    }

    /// Total precedence order between `a` and `b`.
    pub fn compare(&self, a: &Version, b: &Version) -> Ordering {
        a.major()
            .cmp(&b.major())
            .then_with(|| a.minor().cmp(&b.minor()))
            .then_with(|| a.patch().cmp(&b.patch()))
            .then_with(|| self.compare_pre_release(a.pre_release(), b.pre_release()))
    }

    /// Returns `true` if `a` has strictly lower precedence than `b`.
    pub fn less_than(&self, a: &Version, b: &Version) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Precedence equality: neither side is lower than the other.
    ///
    /// Build metadata is ignored. See [`Version::strict_eq`] for field-level
    /// equality.
    pub fn equal(&self, a: &Version, b: &Version) -> bool {
        !self.less_than(a, b) && !self.less_than(b, a)
    }

    /// Sort `versions` into ascending precedence.
    ///
    /// The sort is stable, so versions of equal precedence (for example ones
    /// differing only in build metadata) keep their input order.
    pub fn sort(&self, versions: &mut [Version]) {
        versions.sort_by(|a, b| self.compare(a, b));
    }

    fn compare_pre_release(&self, a: Option<&[String]>, b: Option<&[String]>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(a), Some(b)) => a
                .iter()
                .zip(b)
                .map(|(x, y)| self.compare_identifiers(x, y))
                .find(|ord| ord.is_ne())
                .unwrap_or_else(|| a.len().cmp(&b.len())),
        }
    }

    /// Order two single pre-release identifiers.
    pub fn compare_identifiers(&self, a: &str, b: &str) -> Ordering {
        match (is_numeric(a), is_numeric(b)) {
            (true, true) => compare_numeric(a, b),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => match self.ordering {
                IdentifierOrdering::Lexical => a.cmp(b),
                IdentifierOrdering::Natural => compare_natural(a, b),
            },
        }
    }
}

/// Strict-ordering shorthand for `Comparator::default().less_than(a, b)`.
pub fn less_than(a: &Version, b: &Version) -> bool {
    Comparator::default().less_than(a, b)
}

/// Compare two digit strings by value without a fixed-width conversion.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_natural(a: &str, b: &str) -> Ordering {
    let mut left = runs(a);
    let mut right = runs(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = if is_numeric(x) && is_numeric(y) {
                    compare_numeric(x, y)
                } else {
                    x.cmp(y)
                };
                if ord.is_ne() {
                    return ord;
                }
            }
        }
    }
}

/// Split `s` into maximal runs of digits and non-digits.
fn runs(s: &str) -> impl Iterator<Item = &str> {
    let bytes = s.as_bytes();
    let mut start = 0;
    std::iter::from_fn(move || {
        if start >= bytes.len() {
            return None;
        }
        let digit = bytes[start].is_ascii_digit();
        let len = bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit() == digit)
            .count();
        let run = &s[start..start + len];
        start += len;
        Some(run)
    })
}
