//! The version value type
//!
//! A [`Version`] is immutable: every derivation returns a new value.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::VersionError;
use crate::fields::{identifiers_to_value, type_name, RawFields};
use crate::identifier::Identifiers;
use crate::version_parser::VersionParser;

/// A Semantic Versioning 2.0.0 version.
///
/// Format is `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILDMETADATA]`.
///
/// Equality and ordering take build metadata into account: `1.0.0+a` and
/// `1.0.0+b` are different versions, and `1.0.0+build` sorts before `1.0.0`.
/// semver.org says build metadata must be ignored for precedence; this type
/// deliberately does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Option<Identifiers>,
    buildmetadata: Option<Identifiers>,
}

/// Which optional fields survive a `next_*` bump
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Keep {
    pub prerelease: bool,
    pub buildmetadata: bool,
}

impl Keep {
    pub const NONE: Keep = Keep {
        prerelease: false,
        buildmetadata: false,
    };
    pub const ALL: Keep = Keep {
        prerelease: true,
        buildmetadata: true,
    };
}

impl Version {
    /// Create a release version without prerelease or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: None,
            buildmetadata: None,
        }
    }

    /// Create a version from already typed components
    pub fn from_components(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Option<Identifiers>,
        buildmetadata: Option<Identifiers>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease,
            buildmetadata,
        }
    }

    /// Parse a version string such as `1.0.0-rc.1+build.5`
    pub fn from_string(version: &str) -> Result<Self, VersionError> {
        VersionParser::new().parse(version).map(Version::from)
    }

    /// Build from a mapping with keys `major`, `minor`, `patch` and optionally
    /// `prerelease`, `buildmetadata`
    pub fn from_mapping(map: &Map<String, Value>) -> Result<Self, VersionError> {
        RawFields::from_mapping(map).map(Version::from)
    }

    /// Build from 3 to 5 positional values in field order
    pub fn from_tuple(values: &[Value]) -> Result<Self, VersionError> {
        RawFields::from_tuple(values).map(Version::from)
    }

    /// Build from positional values completed by named ones
    pub fn from_args(positional: &[Value], named: &Map<String, Value>) -> Result<Self, VersionError> {
        RawFields::from_args(positional, named).map(Version::from)
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

    pub fn prerelease(&self) -> Option<&Identifiers> {
        self.prerelease.as_ref()
    }

    pub fn buildmetadata(&self) -> Option<&Identifiers> {
        self.buildmetadata.as_ref()
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// Copy with the prerelease removed
    pub fn without_prerelease(&self) -> Version {
        Version {
            prerelease: None,
            ..self.clone()
        }
    }

    /// Copy with the build metadata removed
    pub fn without_buildmetadata(&self) -> Version {
        Version {
            buildmetadata: None,
            ..self.clone()
        }
    }

    pub fn next_major(&self) -> Result<Version, VersionError> {
        self.next_major_keeping(Keep::NONE)
    }

    pub fn next_minor(&self) -> Result<Version, VersionError> {
        self.next_minor_keeping(Keep::NONE)
    }

    pub fn next_patch(&self) -> Result<Version, VersionError> {
        self.next_patch_keeping(Keep::NONE)
    }

    /// Increment major, reset minor and patch
    pub fn next_major_keeping(&self, keep: Keep) -> Result<Version, VersionError> {
        Ok(self.bumped(increment("major", self.major)?, 0, 0, keep))
    }

    /// Increment minor, reset patch
    pub fn next_minor_keeping(&self, keep: Keep) -> Result<Version, VersionError> {
        Ok(self.bumped(self.major, increment("minor", self.minor)?, 0, keep))
    }

    /// Increment patch
    pub fn next_patch_keeping(&self, keep: Keep) -> Result<Version, VersionError> {
        Ok(self.bumped(self.major, self.minor, increment("patch", self.patch)?, keep))
    }

    fn bumped(&self, major: u64, minor: u64, patch: u64, keep: Keep) -> Version {
        Version {
            major,
            minor,
            patch,
            prerelease: self.prerelease.clone().filter(|_| keep.prerelease),
            buildmetadata: self.buildmetadata.clone().filter(|_| keep.buildmetadata),
        }
    }

    /// Render as `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILDMETADATA]`
    pub fn to_str(&self) -> String {
        self.to_string()
    }

    /// Mapping view keyed by field name, in field order.
    ///
    /// With `exclude_none`, absent prerelease and build metadata are omitted;
    /// otherwise they appear as `null`.
    pub fn to_dict(&self, exclude_none: bool) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("major".to_string(), Value::from(self.major));
        map.insert("minor".to_string(), Value::from(self.minor));
        map.insert("patch".to_string(), Value::from(self.patch));

        for (key, field) in [("prerelease", &self.prerelease), ("buildmetadata", &self.buildmetadata)] {
            match field {
                Some(ids) => {
                    map.insert(key.to_string(), identifiers_to_value(ids));
                }
                None if !exclude_none => {
                    map.insert(key.to_string(), Value::Null);
                }
                None => {}
            }
        }
        map
    }

    /// Positional view in field order.
    ///
    /// With `exclude_none`, only trailing absent fields are dropped, so a
    /// version with build metadata but no prerelease keeps a `null` in the
    /// prerelease slot and stays readable by [`Version::from_tuple`].
    pub fn to_tuple(&self, exclude_none: bool) -> Vec<Value> {
        let mut values = vec![
            Value::from(self.major),
            Value::from(self.minor),
            Value::from(self.patch),
            self.prerelease.as_ref().map_or(Value::Null, identifiers_to_value),
            self.buildmetadata.as_ref().map_or(Value::Null, identifiers_to_value),
        ];
        if exclude_none {
            while values.len() > 3 && values.last() == Some(&Value::Null) {
                values.pop();
            }
        }
        values
    }
}

fn increment(field: &str, value: u64) -> Result<u64, VersionError> {
    value
        .checked_add(1)
        .ok_or_else(|| VersionError::invalid_field(field, "cannot be incremented past u64::MAX"))
}

impl From<RawFields> for Version {
    fn from(raw: RawFields) -> Self {
        Version {
            major: raw.major,
            minor: raw.minor,
            patch: raw.patch,
            prerelease: raw.prerelease,
            buildmetadata: raw.buildmetadata,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.buildmetadata {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::from_string(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Version::from_string(value)
    }
}

/// Explicit conversion from an untyped value: a string, a mapping or a sequence
impl TryFrom<&Value> for Version {
    type Error = VersionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Version::from_string(s),
            Value::Object(map) => Version::from_mapping(map),
            Value::Array(values) => Version::from_tuple(values),
            other => Err(VersionError::invalid_field(
                "version",
                format!("expected a string, mapping or sequence, got {}", type_name(other)),
            )),
        }
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Version::try_from(&value).map_err(D::Error::custom)
    }
}

/// The version of this crate as a [`Version`]
pub fn version_info() -> Result<Version, VersionError> {
    Version::from_string(env!("CARGO_PKG_VERSION"))
}
