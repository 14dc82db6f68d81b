//! Version string parsing

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::VersionError;
use crate::fields::RawFields;
use crate::identifier::Identifiers;

lazy_static! {
    // Pattern published on https://semver.org/
    static ref VERSION_RE: Regex = Regex::new(concat!(
        r"^(?P<major>0|[1-9][0-9]*)\.(?P<minor>0|[1-9][0-9]*)\.(?P<patch>0|[1-9][0-9]*)",
        r"(?:-(?P<prerelease>(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
        r"(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    )).unwrap();
}

/// Parses `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILDMETADATA]` strings
#[derive(Debug, Default, Clone, Copy)]
pub struct VersionParser;

impl VersionParser {
    pub fn new() -> Self {
        VersionParser
    }

    /// Split a version string into its five raw fields.
    ///
    /// Either the whole string matches or an error is returned; there are no partial results.
    pub fn parse(&self, version: &str) -> Result<RawFields, VersionError> {
        let caps = VERSION_RE
            .captures(version)
            .ok_or_else(|| VersionError::InvalidVersionString(version.to_string()))?;

        let major = parse_number("major", &caps["major"])?;
        let minor = parse_number("minor", &caps["minor"])?;
        let patch = parse_number("patch", &caps["patch"])?;

        let prerelease = caps
            .name("prerelease")
            .map(|m| Identifiers::parse_dotted("prerelease", m.as_str(), true))
            .transpose()?;
        let buildmetadata = caps
            .name("buildmetadata")
            .map(|m| Identifiers::parse_dotted("buildmetadata", m.as_str(), false))
            .transpose()?;

        Ok(RawFields {
            major,
            minor,
            patch,
            prerelease,
            buildmetadata,
        })
    }

    /// Check whether a string matches the version pattern and fits the field types
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }
}

fn parse_number(field: &str, digits: &str) -> Result<u64, VersionError> {
    digits
        .parse::<u64>()
        .map_err(|_| VersionError::invalid_field(field, format!("{} does not fit in 64 bits", digits)))
}
