//! # Validation Errors
//!
//! One variant per failure class. The first four are produced by the
//! engine itself; `Predicate` carries whatever a custom predicate returned.

use std::fmt;

use paramval_core::{LogicalType, ValueKind};
use thiserror::Error;

/// Why a field failed validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The spec has an empty field name. A caller bug, not a data problem.
    #[error("empty field name")]
    EmptyFieldName,

    /// A required field is absent from the document.
    #[error("required field {field} is missing")]
    MissingField {
        /// Name of the missing field.
        field: String,
    },

    /// A `NULL`-typed field holds a non-null value.
    #[error("null value expected in {field} but found {found}")]
    NullExpected {
        /// Name of the offending field.
        field: String,
        /// Runtime kind actually present.
        found: ValueKind,
    },

    /// A field constrained to a concrete type holds null.
    #[error("null value in {field}")]
    NullValue {
        /// Name of the offending field.
        field: String,
    },

    /// The value's runtime kind does not satisfy the expected type.
    #[error("expected {} but found {found}", .expected.describe())]
    TypeMismatch {
        /// Type the spec requires.
        expected: LogicalType,
        /// Runtime kind actually present.
        found: ValueKind,
    },

    /// Returned by a custom predicate. Opaque to the engine.
    #[error(transparent)]
    Predicate(#[from] PredicateError),
}

/// Failure class of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    Presence,
    NullMismatch,
    TypeMismatch,
    Predicate,
}

impl ValidationError {
    /// Returns the failure class, for branching without string matching.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyFieldName => ErrorKind::Configuration,
            Self::MissingField { .. } => ErrorKind::Presence,
            Self::NullExpected { .. } | Self::NullValue { .. } => ErrorKind::NullMismatch,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::Predicate(_) => ErrorKind::Predicate,
        }
    }
}

/// Error returned by a custom predicate.
///
/// Displays as exactly the message it was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateError {
    message: String,
}

impl PredicateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PredicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for PredicateError {}

impl From<&str> for PredicateError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for PredicateError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
