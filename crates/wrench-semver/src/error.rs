//! Error type shared by parsing, construction and comparison

use thiserror::Error;

/// Errors raised while building or comparing a [`Version`](crate::Version)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The text does not match the version pattern
    #[error("Invalid version string \"{0}\"")]
    InvalidVersionString(String),

    /// A field is present but its value breaks the version invariants
    #[error("Invalid value for field \"{field}\": {reason}")]
    InvalidVersionFields { field: String, reason: String },

    /// The same field was supplied both positionally and by name
    #[error("Got multiple values for argument(s) {}", .0.join(", "))]
    ConflictingArguments(Vec<String>),

    /// A field outside major, minor, patch, prerelease and buildmetadata
    #[error("Unrecognized argument(s) {}", .0.join(", "))]
    UnrecognizedArgument(Vec<String>),

    /// The right-hand side of a comparison cannot be turned into a version
    #[error("Cannot compare a version with a value of type {0}")]
    IncomparableType(String),
}

impl VersionError {
    pub(crate) fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        VersionError::InvalidVersionFields {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
