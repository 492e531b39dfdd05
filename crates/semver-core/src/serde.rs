//! Structured-data encoding of [`Version`].
//!
//! A version maps to a record of its five raw fields:
//!
//! ```json
//! { "major": 1, "minor": 2, "patch": 3, "pre_release": ["rc", "1"], "build_metadata": null }
//! ```
//!
//! Absent identifier lists encode as `null` and empty ones as `[]`, so the
//! three states survive a round trip. Decoding goes through
//! [`Version::with_identifiers`] and rejects whatever that constructor
//! rejects.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::Version;

#[derive(Serialize)]
struct VersionFields<'a> {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<&'a [String]>,
    build_metadata: Option<&'a [String]>,
}

#[derive(Deserialize)]
struct OwnedVersionFields {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<Vec<String>>,
    build_metadata: Option<Vec<String>>,
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        VersionFields {
            major: self.major(),
            minor: self.minor(),
            patch: self.patch(),
            pre_release: self.pre_release(),
            build_metadata: self.build_metadata(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = OwnedVersionFields::deserialize(deserializer)?;
        Self::with_identifiers(
            fields.major,
            fields.minor,
            fields.patch,
            fields.pre_release,
            fields.build_metadata,
        )
        .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn encodes_raw_fields_only() {
        let v: Version = "1.2.3-rc.1".parse().unwrap();
        let value = serde_json::to_value(&v).unwrap();
        assert_eq!(
            value,
            json!({
                "major": 1,
                "minor": 2,
                "patch": 3,
                "pre_release": ["rc", "1"],
                "build_metadata": null
            })
        );
    }

    #[test]
    fn empty_list_is_not_null() {
        let v = Version::with_pre_release(1, 0, 0, Some(Vec::new())).unwrap();
        let value = serde_json::to_value(&v).unwrap();
        assert_eq!(value["pre_release"], json!([]));
    }

    #[test]
    fn missing_identifier_fields_decode_as_absent() {
        let v: Version = serde_json::from_value(json!({"major": 4, "minor": 5, "patch": 6})).unwrap();
        assert!(v.strict_eq(&Version::new(4, 5, 6)));
    }

    #[test]
    fn decode_rejects_what_constructors_reject() {
        let err = serde_json::from_value::<Version>(json!({
            "major": 0, "minor": 0, "patch": 0, "pre_release": ["01"]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("leading zero"), "{err}");

        assert!(serde_json::from_value::<Version>(json!({
            "major": 0, "minor": 0, "patch": 0, "build_metadata": ["a+b"]
        }))
        .is_err());

        assert!(serde_json::from_value::<Version>(json!({"major": -1, "minor": 0, "patch": 0})).is_err());
    }
}
