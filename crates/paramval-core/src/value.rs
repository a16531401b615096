//! # Dynamic Values
//!
//! `Value` is the tagged representation of one decoded JSON value. The
//! variant is chosen once, at decode time, so every later type check is a
//! match on the tag rather than an inspection of the payload.
//!
//! Integral and floating-point numbers are distinct variants. Whether an
//! integer literal in the source document becomes `Integer` or `Float` is
//! decided by the [`NumberPolicy`](crate::NumberPolicy) used to decode it.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A decoded document: string keys mapped to dynamic values.
///
/// Keys are kept sorted so iteration order, and anything derived from it,
/// is deterministic.
pub type ValueMap = BTreeMap<String, Value>;

/// One dynamically-typed value from a decoded document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicit JSON `null`. Distinct from a missing key.
    Null,
    /// Integral number.
    Integer(i64),
    /// Floating-point number.
    Float(f64),
    /// Text string.
    String(String),
    /// Boolean.
    Bool(bool),
    /// Ordered sequence.
    Array(Vec<Value>),
    /// Nested key/value mapping.
    Object(ValueMap),
}

/// The runtime kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Integer,
    Float,
    String,
    Bool,
    Array,
    Object,
}

impl ValueKind {
    /// Name used when reporting what was actually found in a field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the runtime kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::Bool(_) => ValueKind::Bool,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// True if this is the explicit null marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True for `Integer` and `Float`.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Numeric value widened to `f64`. `None` for non-numbers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Integral value, if this is an `Integer` or a `Float` with no
    /// fractional part that fits in `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Float(f) if f.is_finite() && *f == f.trunc() => {
                if *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ValueMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Self::Object(map)
    }
}

/// Converts with [`NumberPolicy::Preserve`](crate::NumberPolicy::Preserve).
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        crate::decode::from_json_value(value, crate::NumberPolicy::Preserve)
    }
}

/// Non-finite floats have no JSON representation and become `null`.
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Integer(i) => serde_json::Value::from(i),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind().to_string(), "null");
        assert_eq!(Value::Integer(3).kind().to_string(), "integer");
        assert_eq!(Value::Float(3.5).kind().to_string(), "float");
        assert_eq!(Value::from("x").kind().to_string(), "string");
        assert_eq!(Value::Bool(true).kind().to_string(), "bool");
        assert_eq!(Value::Array(vec![]).kind().to_string(), "array");
        assert_eq!(Value::Object(ValueMap::new()).kind().to_string(), "object");
    }

    #[test]
    fn test_as_i64_accepts_whole_floats_only() {
        assert_eq!(Value::Float(4.0).as_i64(), Some(4));
        assert_eq!(Value::Float(-1.0).as_i64(), Some(-1));
        assert_eq!(Value::Float(4.5).as_i64(), None);
        assert_eq!(Value::Float(f64::NAN).as_i64(), None);
        assert_eq!(Value::Float(1e300).as_i64(), None);
        assert_eq!(Value::Integer(7).as_i64(), Some(7));
        assert_eq!(Value::from("7").as_i64(), None);
    }

    #[test]
    fn test_from_json_preserves_shape() {
        let v = Value::from(json!({
            "n": null,
            "i": -1,
            "f": 0.12,
            "s": "text",
            "b": false,
            "a": ["a", 2, false, {}, []],
            "o": {"inner": 1}
        }));
        let map = v.as_object().unwrap();
        assert!(map["n"].is_null());
        assert_eq!(map["i"], Value::Integer(-1));
        assert_eq!(map["f"], Value::Float(0.12));
        assert_eq!(map["s"].as_str(), Some("text"));
        assert_eq!(map["b"].as_bool(), Some(false));
        assert_eq!(map["a"].as_array().map(|a| a.len()), Some(5));
        assert_eq!(map["o"].kind(), ValueKind::Object);
    }

    #[test]
    fn test_into_json_non_finite_is_null() {
        let j: serde_json::Value = Value::Float(f64::INFINITY).into();
        assert!(j.is_null());
    }

    #[test]
    fn test_serialize_untagged() {
        let mut map = ValueMap::new();
        map.insert("k".to_string(), Value::Array(vec![Value::Null, Value::Integer(2)]));
        let json = serde_json::to_string(&Value::Object(map)).unwrap();
        assert_eq!(json, r#"{"k":[null,2]}"#);
    }
}
