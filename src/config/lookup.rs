use crate::error::{NodeError, Result};
use serde_json::Value;

/// Outcome of reading a setting as a particular kind.
///
/// Builders match on this instead of relying on conversion failures, so a
/// missing key and a key of the wrong kind are reported differently.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    Missing,
    WrongKind { found: &'static str },
}

impl<T> Lookup<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            _ => None,
        }
    }

    /// Converts to a `Result`, treating absence as a fatal missing setting
    pub fn require(self, key: &str, expected: &'static str) -> Result<T> {
        match self {
            Lookup::Found(value) => Ok(value),
            Lookup::Missing => Err(NodeError::MissingSetting(key.to_string())),
            Lookup::WrongKind { found } => Err(NodeError::InvalidSetting {
                key: key.to_string(),
                expected,
                found: found.to_string(),
            }),
        }
    }

    /// Converts to a `Result` that tolerates absence
    pub fn optional(self, key: &str, expected: &'static str) -> Result<Option<T>> {
        match self {
            Lookup::Missing => Ok(None),
            other => other.require(key, expected).map(Some),
        }
    }
}

/// Name of a JSON value's kind, for diagnostics
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn as_string(value: Option<Value>) -> Lookup<String> {
    match value {
        None => Lookup::Missing,
        Some(Value::String(s)) => Lookup::Found(s),
        Some(other) => Lookup::WrongKind {
            found: kind_of(&other),
        },
    }
}

/// Unsigned integers are accepted either as JSON numbers or as decimal strings
pub(crate) fn as_unsigned(value: Option<Value>) -> Lookup<Value> {
    match value {
        None => Lookup::Missing,
        Some(v @ Value::String(_)) | Some(v @ Value::Number(_)) => Lookup::Found(v),
        Some(other) => Lookup::WrongKind {
            found: kind_of(&other),
        },
    }
}
