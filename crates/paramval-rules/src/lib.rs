//! # paramval-rules — Declarative Field Validation
//!
//! Validates one field of a decoded document per call. A [`FieldSpec`]
//! names the field, says whether it is required, constrains its
//! [`LogicalType`], and optionally carries a custom [`Predicate`].
//!
//! ## Evaluation Order
//!
//! [`FieldSpec::apply`] short-circuits on the first applicable outcome:
//!
//! 1. Empty field name: configuration error.
//! 2. Key absent: fails if required, passes otherwise. Nothing else runs.
//! 3. Type `NULL`: passes iff the value is null, regardless of `required`.
//! 4. Type `ANY`: skips classification (null included).
//! 5. Concrete type: null fails, otherwise the [`classify`] check runs.
//! 6. The predicate, if any, runs once and its result is returned verbatim.
//!
//! ## Composition
//!
//! Rules are independent. Callers validating a whole document iterate their
//! own list of specs and choose fail-fast or collect-all aggregation.
//!
//! ## Crate Policy
//!
//! - Depends only on `paramval-core` internally.
//! - Every failure produced by the engine carries an error, and every pass
//!   carries none. Predicate results are forwarded without correction.
//! - Errors are returned, never logged in place of being returned.

pub mod classify;
pub mod descriptor;
pub mod error;
pub mod predicate;
pub mod spec;
pub mod verdict;

pub use classify::classify;
pub use descriptor::FieldDescriptor;
pub use error::{ErrorKind, PredicateError, ValidationError};
pub use predicate::{from_result, Predicate};
pub use spec::FieldSpec;
pub use verdict::Verdict;

pub use paramval_core::{LogicalType, Value, ValueKind, ValueMap};
