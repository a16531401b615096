//! # Field Specifications
//!
//! `FieldSpec` is one validation rule and [`FieldSpec::apply`] is the
//! evaluator. A spec is immutable once built and may be applied to any
//! number of documents, from any number of threads.
//!
//! ## Precedence
//!
//! The presence check fully short-circuits: an absent optional field passes
//! even under type `NULL`, and no predicate runs. Once the field is present,
//! `NULL` ignores `required` entirely. Both behaviors are intentional and
//! covered by tests.

use std::fmt;
use std::sync::Arc;

use paramval_core::{LogicalType, Value, ValueMap};

use crate::classify::classify;
use crate::error::ValidationError;
use crate::predicate::{self, Predicate};
use crate::verdict::Verdict;

/// One named validation rule.
///
/// Defaults: optional, type `ANY`, no predicate.
///
/// ```
/// use paramval_rules::{FieldSpec, LogicalType, PredicateError, Value};
///
/// let spec = FieldSpec::new("age")
///     .required()
///     .of_type(LogicalType::Integer)
///     .with_predicate(|v: &Value| match v.as_i64() {
///         Some(n) if n >= 0 => (true, None),
///         _ => (false, Some(PredicateError::new("must be non-negative"))),
///     });
///
/// let doc = paramval_core::decode::from_str(r#"{"age": 42}"#).unwrap();
/// assert!(spec.apply(&doc).is_valid());
/// ```
#[derive(Clone, Default)]
pub struct FieldSpec {
    field_name: String,
    required: bool,
    logical_type: LogicalType,
    predicate: Option<Arc<dyn Predicate>>,
}

impl FieldSpec {
    /// Create an optional, `ANY`-typed rule for `field_name`.
    ///
    /// An empty name is accepted here and reported by [`apply`](Self::apply).
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn set_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn of_type(mut self, logical_type: LogicalType) -> Self {
        self.logical_type = logical_type;
        self
    }

    /// Attach a custom predicate, replacing any previous one.
    pub fn with_predicate(mut self, predicate: impl Predicate + 'static) -> Self {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    /// Attach an already shared predicate.
    pub fn with_shared_predicate(mut self, predicate: Arc<dyn Predicate>) -> Self {
        self.predicate = Some(predicate);
        self
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn logical_type(&self) -> LogicalType {
        self.logical_type
    }

    pub fn has_predicate(&self) -> bool {
        self.predicate.is_some()
    }

    /// Validate this rule's field in `values`.
    ///
    /// Pure apart from the predicate: `values` is only read, and nothing
    /// about the call is retained. Engine-produced verdicts are always
    /// consistent; a predicate's verdict is returned as the predicate
    /// produced it.
    pub fn apply(&self, values: &ValueMap) -> Verdict {
        if self.field_name.is_empty() {
            tracing::trace!("rejecting spec with empty field name");
            return Verdict::fail(ValidationError::EmptyFieldName);
        }

        let field = self.field_name.as_str();
        let Some(value) = values.get(field) else {
            if self.required {
                tracing::trace!(field, outcome = "missing", "required field absent");
                return Verdict::fail(ValidationError::MissingField {
                    field: self.field_name.clone(),
                });
            }
            tracing::trace!(field, outcome = "absent", "optional field absent");
            return Verdict::pass();
        };

        match self.logical_type {
            LogicalType::Null => {
                if value.is_null() {
                    Verdict::pass()
                } else {
                    tracing::trace!(field, found = %value.kind(), "null expected");
                    Verdict::fail(ValidationError::NullExpected {
                        field: self.field_name.clone(),
                        found: value.kind(),
                    })
                }
            }
            LogicalType::Any => self.run_predicate(value),
            expected => {
                if value.is_null() {
                    tracing::trace!(field, expected = %expected, "null in typed field");
                    return Verdict::fail(ValidationError::NullValue {
                        field: self.field_name.clone(),
                    });
                }
                let typed = classify(value, expected);
                if !typed.is_valid() {
                    tracing::trace!(field, expected = %expected, found = %value.kind(), "type mismatch");
                    return typed;
                }
                self.run_predicate(value)
            }
        }
    }

    fn run_predicate(&self, value: &Value) -> Verdict {
        predicate::run(value, self.predicate.as_deref())
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("field_name", &self.field_name)
            .field("required", &self.required)
            .field("logical_type", &self.logical_type)
            .field("predicate", &self.predicate.as_ref().map(|_| "<predicate>"))
            .finish()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Integer),
            (-1.0e12f64..1.0e12).prop_map(Value::Float),
            "[a-z ]{0,12}".prop_map(Value::String),
        ];
        leaf.prop_recursive(2, 16, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,6}", inner, 0..4).prop_map(Value::Object),
            ]
        })
    }

    fn value_map() -> impl Strategy<Value = ValueMap> {
        prop::collection::btree_map("[a-z]{1,6}", value(), 0..8)
    }

    fn logical_type() -> impl Strategy<Value = LogicalType> {
        prop::sample::select(LogicalType::all().to_vec())
    }

    proptest! {
        #[test]
        fn empty_name_always_fails(map in value_map(), t in logical_type(), required in any::<bool>()) {
            let v = FieldSpec::new("").set_required(required).of_type(t).apply(&map);
            prop_assert!(!v.is_valid());
            prop_assert!(v.error().is_some());
        }

        #[test]
        fn absent_field_follows_required(map in value_map(), t in logical_type(), required in any::<bool>()) {
            // Keys in value_map() are lowercase only.
            let v = FieldSpec::new("ABSENT").set_required(required).of_type(t).apply(&map);
            prop_assert_eq!(v.is_valid(), !required);
            prop_assert!(v.is_consistent());
        }

        #[test]
        fn null_type_passes_iff_null(value in value(), required in any::<bool>()) {
            let mut map = ValueMap::new();
            let is_null = value.is_null();
            map.insert("f".to_string(), value);
            let v = FieldSpec::new("f").set_required(required).of_type(LogicalType::Null).apply(&map);
            prop_assert_eq!(v.is_valid(), is_null);
            prop_assert!(v.is_consistent());
        }

        #[test]
        fn integer_accepts_float_iff_whole(f in -1.0e12f64..1.0e12) {
            let mut map = ValueMap::new();
            map.insert("f".to_string(), Value::Float(f));
            let v = FieldSpec::new("f").of_type(LogicalType::Integer).apply(&map);
            prop_assert_eq!(v.is_valid(), f == f.trunc());
        }

        #[test]
        fn number_accepts_exactly_numbers(value in value()) {
            let mut map = ValueMap::new();
            let is_number = value.is_number();
            map.insert("f".to_string(), value);
            let v = FieldSpec::new("f").of_type(LogicalType::Number).apply(&map);
            prop_assert_eq!(v.is_valid(), is_number);
        }

        #[test]
        fn engine_verdicts_are_consistent_and_idempotent(
            map in value_map(),
            t in logical_type(),
            required in any::<bool>(),
            name in "[a-z]{1,6}",
        ) {
            let spec = FieldSpec::new(name).set_required(required).of_type(t);
            let first = spec.apply(&map);
            prop_assert!(first.is_consistent());
            prop_assert_eq!(first, spec.apply(&map));
        }
    }
}
