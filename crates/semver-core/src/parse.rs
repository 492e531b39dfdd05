//! String parsing for [`Version`].
//!
//! The input is read left to right as:
//!
//! 1. the numeric core: the longest prefix made of digits and `.`, holding
//!    one to three integers,
//! 2. an optional pre-release segment starting at `-` and running up to the
//!    first `+`,
//! 3. an optional build-metadata segment: everything after the first `+`.
//!
//! The numeric core must survive a round trip: re-joining the parsed
//! integers with `.` has to reproduce it byte for byte. That single check
//! rejects empty components (`1..0`), stray dots (`.1`, `1.2.`), leading
//! zeros (`01.2.3`) and a fourth component (`1.2.3.4`).
//!
//! An empty pre-release or build-metadata segment (`1.2.3-`, `1.2.3+`) is
//! treated as absent.

use tracing::{debug, trace};

use crate::error::{Result, VersionError};
use crate::version::Version;

/// Parse `input` as a version. See the module docs for the grammar.
pub fn parse(input: &str) -> Result<Version> {
    let result = parse_strict(input);
    match &result {
        Ok(version) => trace!(input, %version, "parsed version"),
        Err(error) => debug!(input, %error, "rejected version string"),
    }
    result
}

/// Trim surrounding whitespace and one leading `v`/`V`, then [`parse`].
pub fn parse_tolerant(input: &str) -> Result<Version> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix(&['v', 'V'][..]).unwrap_or(trimmed);
    parse(trimmed)
}

fn parse_strict(input: &str) -> Result<Version> {
    if input.is_empty() {
        return Ok(Version::ZERO);
    }

    let core_len = input
        .bytes()
        .take_while(|b| b.is_ascii_digit() || *b == b'.')
        .count();
    let (core, rest) = input.split_at(core_len);
    let (major, minor, patch) = parse_numeric_core(core)?;

    if !(rest.is_empty() || rest.starts_with('-') || rest.starts_with('+')) {
        return Err(VersionError::UnexpectedText(rest.to_owned()));
    }

    let (pre_segment, build_segment) = match rest.split_once('+') {
        Some((pre, build)) => (pre, build),
        None => (rest, ""),
    };
    let pre_segment = pre_segment.strip_prefix('-').unwrap_or(pre_segment);

    Version::with_identifiers(
        major,
        minor,
        patch,
        split_identifiers(pre_segment),
        split_identifiers(build_segment),
    )
}

fn parse_numeric_core(core: &str) -> Result<(u64, u64, u64)> {
    let invalid = || VersionError::InvalidNumericCore(core.to_owned());

    let components = core
        .split('.')
        .map(str::parse::<u64>)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;

    let rejoined = components
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".");
    if rejoined != core {
        return Err(invalid());
    }

    match *components.as_slice() {
        [major] => Ok((major, 0, 0)),
        [major, minor] => Ok((major, minor, 0)),
        [major, minor, patch] => Ok((major, minor, patch)),
        _ => Err(invalid()),
    }
}

/// An empty segment means the segment is absent.
fn split_identifiers(segment: &str) -> Option<Vec<String>> {
    if segment.is_empty() {
        return None;
    }
    Some(segment.split('.').map(str::to_owned).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(ids: Option<&[String]>) -> Option<Vec<&str>> {
        ids.map(|ids| ids.iter().map(String::as_str).collect())
    }

    #[test]
    fn empty_string_is_zero() {
        let v = parse("").expect("empty input should parse");
        assert!(v.strict_eq(&Version::ZERO));
    }

    #[test]
    fn full_version() {
        let v = parse("1.2.3-alpha.1+build.007").unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), (1, 2, 3));
        assert_eq!(strs(v.pre_release()), Some(vec!["alpha", "1"]));
        assert_eq!(strs(v.build_metadata()), Some(vec!["build", "007"]));
    }

    #[test]
    fn short_cores_default_to_zero() {
        assert!(parse("7").unwrap().strict_eq(&Version::new(7, 0, 0)));
        assert!(parse("7.4").unwrap().strict_eq(&Version::new(7, 4, 0)));
        assert!(parse("7.4-rc").unwrap().strict_eq(
            &Version::with_pre_release(7, 4, 0, Some(vec!["rc".into()])).unwrap()
        ));
    }

    #[test]
    fn plus_first_means_no_pre_release() {
        let v = parse("1.2.3+b-c").unwrap();
        assert!(v.pre_release().is_none());
        assert_eq!(strs(v.build_metadata()), Some(vec!["b-c"]));
    }

    #[test]
    fn hyphens_inside_pre_release_are_kept() {
        let v = parse("1.2.3-a-b--c").unwrap();
        assert_eq!(strs(v.pre_release()), Some(vec!["a-b--c"]));
        assert!(v.build_metadata().is_none());
    }

    #[test]
    fn empty_segments_are_absent() {
        for input in ["1.2.3-", "1.2.3+", "1.2.3-+"] {
            let v = parse(input).unwrap();
            assert!(v.pre_release().is_none(), "{input}");
            assert!(v.build_metadata().is_none(), "{input}");
        }
    }

    #[test]
    fn rejects_malformed_numeric_cores() {
        for input in ["1.1.", "1..1", ".1.1", "1.2.3.4", "01.2.3", "1.02.3", "."] {
            assert!(
                matches!(parse(input), Err(VersionError::InvalidNumericCore(_))),
                "should reject {input:?}"
            );
        }
    }

    #[test]
    fn rejects_inputs_without_a_numeric_core() {
        for input in ["a", "+", "-", "+-", "-1.2.3", "v1.2.3"] {
            assert!(parse(input).is_err(), "should reject {input:?}");
        }
    }

    #[test]
    fn rejects_overflowing_components() {
        assert!(parse("18446744073709551615.0.0").is_ok());
        assert!(parse("18446744073709551616.0.0").is_err());
    }

    #[test]
    fn rejects_trailing_text_after_core() {
        assert_eq!(
            parse("1.2.3a").unwrap_err(),
            VersionError::UnexpectedText("a".into())
        );
        assert!(parse("1.2.3 ").is_err());
    }

    #[test]
    fn second_plus_invalidates_build_metadata() {
        assert!(matches!(
            parse("1.2.3-a+b+c"),
            Err(VersionError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn rejects_bad_identifiers() {
        assert!(parse("1.2.3-01").is_err());
        assert!(parse("1.2.3-a..b").is_err());
        assert!(parse("1.2.3-a_b").is_err());
        assert!(parse("1.2.3+a.").is_err());
        assert!(parse("1.2.3+01").is_ok());
    }

    #[test]
    fn tolerant_trims_whitespace_and_v_prefix() {
        let expected = parse("1.4.0-beta").unwrap();
        for input in ["v1.4.0-beta", "V1.4.0-beta", "  1.4.0-beta\n", "\tv1.4.0-beta "] {
            let v = parse_tolerant(input).unwrap();
            assert!(v.strict_eq(&expected), "{input:?}");
        }
        assert!(parse_tolerant("vv1.0.0").is_err());
        assert!(parse_tolerant("v 1.0.0").is_err());
    }
}
