//! Semantic Versioning 2.0.0 value type
//!
//! This crate parses version strings, builds versions from strings, mappings,
//! positional sequences or typed components, orders them by precedence and
//! derives new versions from existing ones.
//!
//! Build metadata takes part in equality and ordering, unlike semver.org
//! which says it must be ignored for precedence.

mod comparator;
mod error;
mod fields;
mod identifier;
mod semver;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use error::VersionError;
pub use fields::{RawFields, FIELD_NAMES};
pub use identifier::{AlphaNumeric, Identifier, Identifiers};
pub use semver::Semver;
pub use version::{version_info, Keep, Version};
pub use version_parser::VersionParser;
