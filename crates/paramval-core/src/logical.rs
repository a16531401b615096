//! # Logical Types
//!
//! Defines `LogicalType`, the closed set of shapes a validated field may be
//! constrained to. Two members are special: `Any` disables type checking
//! and `Null` demands the explicit null marker.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParamvalError;

/// The recognized data shapes a field may be constrained to.
///
/// | Type | Accepts |
/// |------|---------|
/// | `Any` | every value, including null (no type check) |
/// | `Null` | only the explicit null marker |
/// | `Integer` | integral values, and floats with no fractional part |
/// | `Float` | floating-point values |
/// | `Number` | integral or floating-point values |
/// | `String` | text |
/// | `Boolean` | `true` / `false` |
/// | `Object` | key/value mappings |
/// | `Array` | ordered sequences |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogicalType {
    /// Skip the type check entirely.
    #[default]
    Any,
    /// The explicit null marker.
    Null,
    /// A whole number.
    Integer,
    /// A floating-point number.
    Float,
    /// Any numeric value.
    Number,
    /// A text string.
    String,
    /// A boolean.
    Boolean,
    /// A key/value mapping.
    Object,
    /// An ordered sequence.
    Array,
}

/// Total number of logical types.
pub const LOGICAL_TYPE_COUNT: usize = 9;

impl LogicalType {
    /// Returns every logical type in declaration order.
    pub fn all() -> &'static [LogicalType] {
        &[
            Self::Any,
            Self::Null,
            Self::Integer,
            Self::Float,
            Self::Number,
            Self::String,
            Self::Boolean,
            Self::Object,
            Self::Array,
        ]
    }

    /// Returns the configuration name of this type.
    ///
    /// Matches the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "ANY",
            Self::Null => "NULL",
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
            Self::Object => "OBJECT",
            Self::Array => "ARRAY",
        }
    }

    /// Human-readable name used in type-mismatch diagnostics,
    /// e.g. "expected an integer but found float".
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Any => "any value",
            Self::Null => "null",
            Self::Integer => "an integer",
            Self::Float => "float",
            Self::Number => "a number",
            Self::String => "string",
            Self::Boolean => "bool",
            Self::Object => "an object",
            Self::Array => "an array",
        }
    }

    /// True for types that constrain the runtime kind of a non-null value.
    pub fn is_concrete(&self) -> bool {
        !matches!(self, Self::Any | Self::Null)
    }
}

impl std::fmt::Display for LogicalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicalType {
    type Err = ParamvalError;

    /// Parse a logical type from its configuration name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ANY" => Ok(Self::Any),
            "NULL" => Ok(Self::Null),
            "INTEGER" => Ok(Self::Integer),
            "FLOAT" => Ok(Self::Float),
            "NUMBER" => Ok(Self::Number),
            "STRING" => Ok(Self::String),
            "BOOLEAN" => Ok(Self::Boolean),
            "OBJECT" => Ok(Self::Object),
            "ARRAY" => Ok(Self::Array),
            other => Err(ParamvalError::UnknownType(other.to_string())),
        }
    }
}
