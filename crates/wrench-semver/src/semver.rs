//! Semver facade providing high-level version operations

use crate::{Comparator, Version, VersionError, VersionParser};

/// Main facade for semantic versioning operations on strings
pub struct Semver;

impl Semver {
    /// Parse a version string
    pub fn parse(version: &str) -> Result<Version, VersionError> {
        Version::from_string(version)
    }

    /// Check whether a string is a valid version
    pub fn is_valid(version: &str) -> bool {
        VersionParser::new().is_valid(version)
    }

    /// Compare two version strings, returning -1, 0 or 1
    pub fn compare(version1: &str, version2: &str) -> Result<i32, VersionError> {
        let v1 = Self::parse(version1)?;
        let v2 = Self::parse(version2)?;
        Ok(Comparator::compare(&v1, &v2))
    }

    /// Sort versions in ascending order.
    ///
    /// Fails on the first string that is not a valid version.
    pub fn sort(versions: &[&str]) -> Result<Vec<Version>, VersionError> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Result<Vec<Version>, VersionError> {
        Self::usort(versions, false)
    }

    /// Highest of the given versions, `None` for an empty slice
    pub fn max(versions: &[&str]) -> Result<Option<Version>, VersionError> {
        Ok(Self::rsort(versions)?.into_iter().next())
    }

    fn usort(versions: &[&str], ascending: bool) -> Result<Vec<Version>, VersionError> {
        let mut parsed = versions
            .iter()
            .map(|v| Self::parse(v))
            .collect::<Result<Vec<_>, _>>()?;

        if ascending {
            parsed.sort();
        } else {
            parsed.sort_by(|a, b| b.cmp(a));
        }

        Ok(parsed)
    }
}
