//! # Type Classifier
//!
//! Tests the runtime kind of a value against a [`LogicalType`].
//!
//! `INTEGER` is a value-level property: an `Integer` always qualifies and a
//! `Float` qualifies when `v == v.trunc()`, so `4.0` and `-1.0` pass while
//! `4.5` fails. `NUMBER` accepts both numeric kinds. `FLOAT` accepts only
//! the `Float` kind.

use paramval_core::{LogicalType, Value};

use crate::error::ValidationError;
use crate::verdict::Verdict;

/// Check `value` against `expected`.
///
/// `ANY` always passes and `NULL` passes only for null. The evaluator
/// handles both before calling here; they are covered so the function is
/// total.
pub fn classify(value: &Value, expected: LogicalType) -> Verdict {
    if satisfies(value, expected) {
        Verdict::pass()
    } else {
        Verdict::fail(ValidationError::TypeMismatch {
            expected,
            found: value.kind(),
        })
    }
}

fn satisfies(value: &Value, expected: LogicalType) -> bool {
    match expected {
        LogicalType::Any => true,
        LogicalType::Null => value.is_null(),
        LogicalType::Integer => match value {
            Value::Integer(_) => true,
            Value::Float(f) => *f == f.trunc(),
            _ => false,
        },
        LogicalType::Float => matches!(value, Value::Float(_)),
        LogicalType::Number => value.is_number(),
        LogicalType::String => matches!(value, Value::String(_)),
        LogicalType::Boolean => matches!(value, Value::Bool(_)),
        LogicalType::Object => matches!(value, Value::Object(_)),
        LogicalType::Array => matches!(value, Value::Array(_)),
    }
}
