//! Version precedence and comparison utilities

use std::cmp::Ordering;

use serde_json::Value;

use crate::error::VersionError;
use crate::fields::type_name;
use crate::identifier::{Identifier, Identifiers};
use crate::version::Version;

impl Ord for Identifier {
    /// Numeric identifiers sort before alphanumeric ones; numbers compare by
    /// value and text compares by byte order.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => a.as_str().cmp(b.as_str()),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifiers {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_identifiers(self.as_slice(), other.as_slice())
    }
}

impl PartialOrd for Identifiers {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Walk two identifier sequences pairwise.
///
/// The first differing identifier decides. When one sequence is a prefix of
/// the other, the shorter one is lower.
fn compare_identifiers(left: &[Identifier], right: &[Identifier]) -> Ordering {
    for (l, r) in left.iter().zip(right) {
        match l.cmp(r) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }
    left.len().cmp(&right.len())
}

/// Absent outranks present: `1.0.0` is greater than `1.0.0-rc.1`.
///
/// Applied to build metadata as well, so `1.0.0+build` is lower than `1.0.0`.
fn compare_optional(left: Option<&Identifiers>, right: Option<&Identifiers>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(l), Some(r)) => l.cmp(r),
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major()
            .cmp(&other.major())
            .then_with(|| self.minor().cmp(&other.minor()))
            .then_with(|| self.patch().cmp(&other.patch()))
            .then_with(|| compare_optional(self.prerelease(), other.prerelease()))
            .then_with(|| compare_optional(self.buildmetadata(), other.buildmetadata()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Comparator for versions
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        version1 > version2
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        version1 >= version2
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        version1 < version2
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        version1 <= version2
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        version1 == version2
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        version1 != version2
    }

    /// Compare two versions, returning -1, 0 or 1
    pub fn compare(version1: &Version, version2: &Version) -> i32 {
        match version1.cmp(version2) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Compare a version with an untyped value.
    ///
    /// Strings, mappings and sequences are converted explicitly first. Any
    /// other kind of value is rejected with [`VersionError::IncomparableType`];
    /// conversion failures are returned unchanged.
    pub fn compare_value(version: &Version, other: &Value) -> Result<Ordering, VersionError> {
        match other {
            Value::String(_) | Value::Object(_) | Value::Array(_) => {
                let other = Version::try_from(other)?;
                Ok(version.cmp(&other))
            }
            _ => Err(VersionError::IncomparableType(type_name(other).to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v(s: &str) -> Version {
        Version::from_string(s).unwrap()
    }

    #[test]
    fn test_core_ordering() {
        assert!(v("1.0.0") < v("2.0.0"));
        assert!(v("2.0.0") < v("2.1.0"));
        assert!(v("2.1.0") < v("2.1.1"));
        assert!(v("1.9.0") < v("1.10.0"));
        assert!(v("1.10.0") > v("1.9.99"));
    }

    #[test]
    fn test_reference_chain() {
        let chain = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];
        for pair in chain.windows(2) {
            assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
            assert!(v(pair[1]) > v(pair[0]), "{} > {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn test_numeric_identifiers_compare_numerically() {
        assert!(v("1.0.0-alpha.2") < v("1.0.0-alpha.10"));
        assert!(v("1.0.0-2") < v("1.0.0-10"));
    }

    #[test]
    fn test_numeric_before_alphanumeric() {
        assert!(v("1.0.0-1") < v("1.0.0-a"));
        assert!(v("1.0.0-alpha.999") < v("1.0.0-alpha.a"));
    }

    #[test]
    fn test_alphanumeric_ordinal_order() {
        assert!(v("1.0.0-Beta") < v("1.0.0-alpha"));
        assert!(v("1.0.0-a-b") < v("1.0.0-a0"));
    }

    #[test]
    fn test_release_outranks_prerelease() {
        assert!(v("1.0.0-rc.1") < v("1.0.0"));
        assert!(v("1.0.0") > v("1.0.0-0"));
        assert!(v("1.0.0") < v("1.0.1-alpha"));
    }

    #[test]
    fn test_build_metadata_participates() {
        assert_ne!(v("1.0.0+a"), v("1.0.0+b"));
        assert!(v("1.0.0+a") < v("1.0.0+b"));
        assert!(v("1.0.0+build") < v("1.0.0"));
        assert!(v("1.0.0+build.1") < v("1.0.0+build.1.1"));
        assert!(v("1.0.0-rc.1+zzz") < v("1.0.0-rc.2+aaa"));
        assert_eq!(v("1.0.0+build.1"), v("1.0.0+build.1"));
    }

    #[test]
    fn test_build_metadata_digits_compare_numerically() {
        assert_eq!(v("1.0.0+001"), v("1.0.0+1"));
        assert_eq!(Comparator::compare(&v("1.0.0+001"), &v("1.0.0+1")), 0);
        assert!(v("1.0.0+001") < v("1.0.0+2"));
        assert!(v("1.0.0+2") < v("1.0.0+10"));
        assert!(v("1.0.0+exp.007") < v("1.0.0+exp.sha"));
    }

    #[test]
    fn test_derived_operators() {
        let a = v("1.2.3");
        let b = v("1.2.4");
        assert!(a <= b && a <= a.clone());
        assert!(b >= a && b >= b.clone());
        assert!(!(a > a.clone()));
    }

    #[test]
    fn test_comparator_helpers() {
        let low = v("1.25.0");
        let high = v("1.26.0");
        assert!(Comparator::greater_than(&high, &low));
        assert!(Comparator::greater_than_or_equal_to(&high, &high));
        assert!(Comparator::less_than(&low, &high));
        assert!(Comparator::less_than_or_equal_to(&low, &low));
        assert!(Comparator::equal_to(&low, &low.clone()));
        assert!(Comparator::not_equal_to(&low, &high));
        assert_eq!(Comparator::compare(&low, &high), -1);
        assert_eq!(Comparator::compare(&low, &low), 0);
        assert_eq!(Comparator::compare(&high, &low), 1);
    }

    #[test]
    fn test_compare_value() {
        let version = v("1.2.3");
        assert_eq!(Comparator::compare_value(&version, &json!("1.2.4")), Ok(Ordering::Less));
        assert_eq!(
            Comparator::compare_value(&version, &json!({"major": 1, "minor": 2, "patch": 3})),
            Ok(Ordering::Equal)
        );
        assert_eq!(Comparator::compare_value(&version, &json!([1, 0, 0])), Ok(Ordering::Greater));

        assert_eq!(
            Comparator::compare_value(&version, &json!(1)),
            Err(VersionError::IncomparableType("number".to_string()))
        );
        assert_eq!(
            Comparator::compare_value(&version, &Value::Null),
            Err(VersionError::IncomparableType("null".to_string()))
        );
        assert!(matches!(
            Comparator::compare_value(&version, &json!("1.2")),
            Err(VersionError::InvalidVersionString(_))
        ));
    }
}
