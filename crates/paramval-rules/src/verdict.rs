//! # Verdict
//!
//! The `(valid, error)` pair returned by every validation step.

use crate::error::{PredicateError, ValidationError};

/// Outcome of validating one field.
///
/// Verdicts built by the engine are consistent: `pass()` carries no error
/// and `fail()` always carries one. A custom predicate may produce the
/// other two combinations through [`Verdict::from_parts`]; those are
/// forwarded as-is.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Verdict {
    valid: bool,
    error: Option<ValidationError>,
}

impl Verdict {
    pub fn pass() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn fail(error: impl Into<ValidationError>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }

    /// Build a verdict from an arbitrary pair, consistent or not.
    pub fn from_parts(valid: bool, error: Option<ValidationError>) -> Self {
        Self { valid, error }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// True for `(true, None)` and `(false, Some(_))`.
    pub fn is_consistent(&self) -> bool {
        self.valid == self.error.is_none()
    }

    pub fn into_parts(self) -> (bool, Option<ValidationError>) {
        (self.valid, self.error)
    }

    /// Collapse into a `Result`.
    ///
    /// A valid verdict is `Ok(())` even if it carried an error. An invalid
    /// verdict without an error becomes a predicate error saying so.
    pub fn into_result(self) -> Result<(), ValidationError> {
        match (self.valid, self.error) {
            (true, _) => Ok(()),
            (false, Some(e)) => Err(e),
            (false, None) => Err(ValidationError::Predicate(PredicateError::new(
                "predicate rejected value without an error",
            ))),
        }
    }
}
