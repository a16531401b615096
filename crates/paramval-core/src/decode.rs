//! # Document Decoding
//!
//! Turns raw JSON bytes into a [`ValueMap`]. Objects become nested maps,
//! arrays become sequences, and `null` becomes [`Value::Null`].
//!
//! ## Number Handling
//!
//! JSON has one number type. [`NumberPolicy`] decides how it maps onto the
//! `Integer`/`Float` split:
//!
//! - `Preserve` keeps integer literals (`-1`, `42`) as `Integer` and
//!   everything else (`0.0`, `1e3`) as `Float`. Integers that do not fit
//!   in `i64` become `Float`.
//! - `FloatOnly` decodes every number as `Float`, for rule sets written
//!   against decoders with no integral kind. Integrality is then a value
//!   property checked by `INTEGER`.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::value::{Value, ValueMap};

/// How JSON numbers are mapped onto `Value::Integer` / `Value::Float`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberPolicy {
    /// Integer literals decode to `Integer`, all others to `Float`.
    #[default]
    Preserve,
    /// Every number decodes to `Float`.
    FloatOnly,
}

/// Decode a JSON document into a value map using [`NumberPolicy::Preserve`].
///
/// # Errors
///
/// Returns `DecodeError::Json` for malformed input and
/// `DecodeError::NotAnObject` if the document root is not an object.
pub fn from_slice(bytes: &[u8]) -> Result<ValueMap, DecodeError> {
    from_slice_with(bytes, NumberPolicy::Preserve)
}

/// Decode a JSON document held in a string. See [`from_slice`].
pub fn from_str(text: &str) -> Result<ValueMap, DecodeError> {
    from_slice_with(text.as_bytes(), NumberPolicy::Preserve)
}

/// Decode a JSON document with an explicit number policy.
pub fn from_slice_with(bytes: &[u8], policy: NumberPolicy) -> Result<ValueMap, DecodeError> {
    let raw: serde_json::Value = serde_json::from_slice(bytes)?;
    match from_json_value(raw, policy) {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::NotAnObject { found: other.kind() }),
    }
}

/// Convert an already-parsed `serde_json::Value` tree.
pub fn from_json_value(value: serde_json::Value, policy: NumberPolicy) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Number(n) => match (policy, n.as_i64()) {
            (NumberPolicy::Preserve, Some(i)) => Value::Integer(i),
            // as_f64 is always Some for serde_json numbers without
            // arbitrary_precision; NaN is unreachable from valid JSON.
            _ => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|v| from_json_value(v, policy))
                .collect(),
        ),
        serde_json::Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, from_json_value(v, policy)))
                .collect(),
        ),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn json_value() -> impl Strategy<Value = serde_json::Value> {
        let leaf = prop_oneof![
            Just(serde_json::Value::Null),
            any::<bool>().prop_map(serde_json::Value::Bool),
            any::<i64>().prop_map(|n| serde_json::json!(n)),
            (-1.0e9f64..1.0e9).prop_map(|f| serde_json::json!(f)),
            "[a-zA-Z0-9_ ]{0,20}".prop_map(serde_json::Value::String),
        ];
        leaf.prop_recursive(3, 32, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(serde_json::Value::Array),
                prop::collection::btree_map("[a-z]{1,8}", inner, 0..6).prop_map(|m| {
                    serde_json::Value::Object(m.into_iter().collect())
                }),
            ]
        })
    }

    fn has_integer(value: &Value) -> bool {
        match value {
            Value::Integer(_) => true,
            Value::Array(items) => items.iter().any(has_integer),
            Value::Object(map) => map.values().any(has_integer),
            _ => false,
        }
    }

    proptest! {
        /// FloatOnly never yields an integral value anywhere in the tree.
        #[test]
        fn float_only_has_no_integers(raw in json_value()) {
            let v = from_json_value(raw, NumberPolicy::FloatOnly);
            prop_assert!(!has_integer(&v));
        }

        /// Both policies agree on every non-numeric kind.
        #[test]
        fn policies_agree_on_non_numbers(raw in json_value()) {
            let a = from_json_value(raw.clone(), NumberPolicy::Preserve);
            let b = from_json_value(raw, NumberPolicy::FloatOnly);
            prop_assert_eq!(a.is_number(), b.is_number());
            if !a.is_number() {
                prop_assert_eq!(a.kind(), b.kind());
            }
        }
    }
}
