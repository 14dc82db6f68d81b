//! Dot-separated identifiers used by prerelease and build metadata

use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;

/// A single prerelease or build metadata identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Purely numeric identifier, e.g. `11` in `beta.11`
    Numeric(u64),
    /// Any identifier containing a letter or hyphen, e.g. `beta`
    AlphaNumeric(AlphaNumeric),
}

/// Text of an alphanumeric identifier.
///
/// Only built through [`Identifier::alphanumeric`] or parsing, so it is always
/// non-empty, made of `[0-9A-Za-z-]`, and holds at least one non-digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlphaNumeric(String);

impl AlphaNumeric {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlphaNumeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Identifier {
    /// Create a numeric identifier
    pub fn numeric(value: u64) -> Self {
        Identifier::Numeric(value)
    }

    /// Create an alphanumeric identifier.
    ///
    /// The text must be non-empty, made of `[0-9A-Za-z-]`, and contain at least
    /// one non-digit character. Purely numeric text belongs in [`Identifier::numeric`].
    pub fn alphanumeric(text: impl Into<String>) -> Result<Self, VersionError> {
        let text = text.into();
        check_charset("identifier", &text)?;
        if is_digits(&text) {
            return Err(VersionError::invalid_field(
                "identifier",
                format!("\"{}\" is numeric, not alphanumeric", text),
            ));
        }
        Ok(Identifier::AlphaNumeric(AlphaNumeric(text)))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }

    /// Classify one identifier from its textual form.
    ///
    /// Digit runs become numeric. With `strict_numeric` a leading zero is
    /// rejected (prerelease); otherwise `001` reads as `1` (build metadata).
    pub(crate) fn classify(field: &str, text: &str, strict_numeric: bool) -> Result<Self, VersionError> {
        check_charset(field, text)?;

        if !is_digits(text) {
            return Ok(Identifier::AlphaNumeric(AlphaNumeric(text.to_string())));
        }

        if strict_numeric && text.len() > 1 && text.starts_with('0') {
            return Err(VersionError::invalid_field(
                field,
                format!("numeric identifier \"{}\" has a leading zero", text),
            ));
        }

        text.parse::<u64>().map(Identifier::Numeric).map_err(|_| {
            VersionError::invalid_field(field, format!("numeric identifier \"{}\" does not fit in 64 bits", text))
        })
    }
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

fn check_charset(field: &str, text: &str) -> Result<(), VersionError> {
    if text.is_empty() {
        return Err(VersionError::invalid_field(field, "identifier must not be empty"));
    }
    if let Some(c) = text.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '-')) {
        return Err(VersionError::invalid_field(
            field,
            format!("identifier \"{}\" contains invalid character '{}'", text, c),
        ));
    }
    Ok(())
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for Identifier {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::classify("identifier", s, true)
    }
}

impl From<u64> for Identifier {
    fn from(value: u64) -> Self {
        Identifier::Numeric(value)
    }
}

/// Non-empty ordered sequence of identifiers, rendered joined by `.`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifiers(Vec<Identifier>);

impl Identifiers {
    /// Wrap an already classified list of identifiers
    pub fn new(items: Vec<Identifier>) -> Result<Self, VersionError> {
        if items.is_empty() {
            return Err(VersionError::invalid_field("identifiers", "sequence must not be empty"));
        }
        Ok(Identifiers(items))
    }

    /// Parse dotted prerelease text such as `rc.1`
    pub fn prerelease(text: &str) -> Result<Self, VersionError> {
        Self::parse_dotted("prerelease", text, true)
    }

    /// Parse dotted build metadata text such as `build.5`
    pub fn buildmetadata(text: &str) -> Result<Self, VersionError> {
        Self::parse_dotted("buildmetadata", text, false)
    }

    pub(crate) fn parse_dotted(field: &str, text: &str, strict_numeric: bool) -> Result<Self, VersionError> {
        if text.is_empty() {
            return Err(VersionError::invalid_field(field, "sequence must not be empty"));
        }
        text.split('.')
            .map(|part| Identifier::classify(field, part, strict_numeric))
            .collect::<Result<Vec<_>, _>>()
            .map(Identifiers)
    }

    pub fn as_slice(&self) -> &[Identifier] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Identifier> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Identifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Identifiers {
    type Item = &'a Identifier;
    type IntoIter = std::slice::Iter<'a, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Identifier {
        Identifier::alphanumeric(s).unwrap()
    }

    #[test]
    fn test_classify_numeric_and_text() {
        assert_eq!("11".parse::<Identifier>().unwrap(), Identifier::Numeric(11));
        assert_eq!("0".parse::<Identifier>().unwrap(), Identifier::Numeric(0));
        assert_eq!("beta".parse::<Identifier>().unwrap(), text("beta"));
        assert_eq!("0a".parse::<Identifier>().unwrap(), text("0a"));
        assert_eq!("-".parse::<Identifier>().unwrap(), text("-"));
    }

    #[test]
    fn test_classify_rejects_malformed() {
        assert!("".parse::<Identifier>().is_err());
        assert!("a_b".parse::<Identifier>().is_err());
        assert!("a.b".parse::<Identifier>().is_err());
        assert!("01".parse::<Identifier>().is_err());
        assert!("99999999999999999999".parse::<Identifier>().is_err());
    }

    #[test]
    fn test_build_metadata_digits_are_numeric() {
        let build = Identifiers::buildmetadata("exp.001").unwrap();
        assert_eq!(build.as_slice(), &[text("exp"), Identifier::Numeric(1)]);
        assert_eq!(build, Identifiers::buildmetadata("exp.1").unwrap());
        assert_eq!(build.to_string(), "exp.1");

        let err = Identifiers::buildmetadata("99999999999999999999").unwrap_err();
        assert!(matches!(err, VersionError::InvalidVersionFields { ref field, .. } if field == "buildmetadata"));
    }

    #[test]
    fn test_prerelease_rejects_leading_zeros() {
        let err = Identifiers::prerelease("alpha.01").unwrap_err();
        assert!(matches!(err, VersionError::InvalidVersionFields { ref field, .. } if field == "prerelease"));
    }

    #[test]
    fn test_alphanumeric_constructor() {
        assert_eq!(text("rc").to_string(), "rc");
        for bad in ["123", "a.b", "", "r c"] {
            assert!(
                matches!(Identifier::alphanumeric(bad), Err(VersionError::InvalidVersionFields { .. })),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_identifiers_display_and_empty() {
        let pre = Identifiers::prerelease("alpha.1.beta").unwrap();
        assert_eq!(pre.len(), 3);
        assert_eq!(pre.to_string(), "alpha.1.beta");
        assert!(Identifiers::new(Vec::new()).is_err());
        assert!(Identifiers::prerelease("").is_err());
        assert!(Identifiers::prerelease("alpha..1").is_err());
    }

    #[test]
    fn test_checked_identifiers_render_back() {
        let ids = Identifiers::new(vec![text("rc"), Identifier::numeric(1)]).unwrap();
        assert_eq!(Identifiers::prerelease(&ids.to_string()).unwrap(), ids);
    }
}
