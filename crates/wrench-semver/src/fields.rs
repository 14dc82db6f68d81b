//! Normalization of the accepted input shapes into one raw field record

use serde_json::{Map, Value};

use crate::error::VersionError;
use crate::identifier::{Identifier, Identifiers};

/// Field names in positional order
pub const FIELD_NAMES: [&str; 5] = ["major", "minor", "patch", "prerelease", "buildmetadata"];

/// The five fields every input shape is reduced to before a version is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFields {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<Identifiers>,
    pub buildmetadata: Option<Identifiers>,
}

impl RawFields {
    /// Mapping with `major`, `minor`, `patch` required and `prerelease`, `buildmetadata` optional
    pub fn from_mapping(map: &Map<String, Value>) -> Result<Self, VersionError> {
        let unknown: Vec<String> = map
            .keys()
            .filter(|key| !FIELD_NAMES.contains(&key.as_str()))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(VersionError::UnrecognizedArgument(unknown));
        }

        Ok(RawFields {
            major: number_field("major", map.get("major"))?,
            minor: number_field("minor", map.get("minor"))?,
            patch: number_field("patch", map.get("patch"))?,
            prerelease: identifiers_field("prerelease", map.get("prerelease"), true)?,
            buildmetadata: identifiers_field("buildmetadata", map.get("buildmetadata"), false)?,
        })
    }

    /// Positional values in the order major, minor, patch, prerelease, buildmetadata
    pub fn from_tuple(values: &[Value]) -> Result<Self, VersionError> {
        Self::from_args(values, &Map::new())
    }

    /// Positional values completed by named ones.
    ///
    /// A name that is also covered by a positional value is a conflict.
    pub fn from_args(positional: &[Value], named: &Map<String, Value>) -> Result<Self, VersionError> {
        if positional.len() > FIELD_NAMES.len() {
            let extra = (FIELD_NAMES.len()..positional.len())
                .map(|i| format!("positional argument {}", i))
                .collect();
            return Err(VersionError::UnrecognizedArgument(extra));
        }

        let conflicts: Vec<String> = FIELD_NAMES[..positional.len()]
            .iter()
            .filter(|name| named.contains_key(**name))
            .map(|name| name.to_string())
            .collect();
        if !conflicts.is_empty() {
            return Err(VersionError::ConflictingArguments(conflicts));
        }

        let mut merged: Map<String, Value> = FIELD_NAMES
            .iter()
            .zip(positional)
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();
        for (key, value) in named {
            merged.insert(key.clone(), value.clone());
        }

        Self::from_mapping(&merged)
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn non_negative(field: &str, value: &Value) -> Result<u64, VersionError> {
    let number = match value {
        Value::Number(n) => n,
        other => {
            return Err(VersionError::invalid_field(
                field,
                format!("expected a non-negative integer, got {}", type_name(other)),
            ))
        }
    };

    if let Some(n) = number.as_u64() {
        return Ok(n);
    }
    if number.as_i64().is_some() {
        return Err(VersionError::invalid_field(field, format!("must be non-negative, got {}", number)));
    }
    Err(VersionError::invalid_field(field, format!("must be an integer, got {}", number)))
}

fn number_field(field: &str, value: Option<&Value>) -> Result<u64, VersionError> {
    match value {
        None | Some(Value::Null) => Err(VersionError::invalid_field(field, "field is required")),
        Some(value) => non_negative(field, value),
    }
}

fn identifiers_field(field: &str, value: Option<&Value>, strict_numeric: bool) -> Result<Option<Identifiers>, VersionError> {
    let value = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    let identifiers = match value {
        Value::Number(_) => Identifiers::new(vec![Identifier::Numeric(non_negative(field, value)?)])?,
        Value::String(text) => Identifiers::parse_dotted(field, text, strict_numeric)?,
        Value::Array(items) => {
            if items.is_empty() {
                return Err(VersionError::invalid_field(field, "sequence must not be empty"));
            }
            let parsed = items
                .iter()
                .map(|item| match item {
                    Value::Number(_) => non_negative(field, item).map(Identifier::Numeric),
                    Value::String(text) => Identifier::classify(field, text, strict_numeric),
                    other => Err(VersionError::invalid_field(
                        field,
                        format!("identifiers must be integers or strings, got {}", type_name(other)),
                    )),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Identifiers::new(parsed)?
        }
        other => {
            return Err(VersionError::invalid_field(
                field,
                format!("expected an integer, string or array, got {}", type_name(other)),
            ))
        }
    };

    Ok(Some(identifiers))
}

/// Render one identifier as a JSON scalar
pub(crate) fn identifier_to_value(identifier: &Identifier) -> Value {
    match identifier {
        Identifier::Numeric(n) => Value::from(*n),
        Identifier::AlphaNumeric(s) => Value::String(s.to_string()),
    }
}

/// A single identifier renders as a scalar, longer sequences as an array
pub(crate) fn identifiers_to_value(identifiers: &Identifiers) -> Value {
    match identifiers.as_slice() {
        [single] => identifier_to_value(single),
        items => Value::Array(items.iter().map(identifier_to_value).collect()),
    }
}
