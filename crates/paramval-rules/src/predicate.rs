//! # Custom Predicates
//!
//! A predicate is a caller-supplied check run after the type check passes.
//! The engine calls it at most once per [`FieldSpec::apply`] and returns its
//! pair unchanged, so a predicate answering `(true, Some(_))` or
//! `(false, None)` is forwarded exactly as written.
//!
//! Any `Fn(&Value) -> (bool, Option<PredicateError>) + Send + Sync` closure
//! is a predicate. [`from_result`] adapts a closure returning
//! `Result<(), PredicateError>`.
//!
//! [`FieldSpec::apply`]: crate::FieldSpec::apply

use paramval_core::Value;

use crate::error::{PredicateError, ValidationError};
use crate::verdict::Verdict;

/// A value-level check applied to a field that already passed its type
/// check.
///
/// Implementations are shared across threads through the owning spec, so
/// they must be `Send + Sync`. Whether concurrent calls are actually safe
/// is up to the implementation.
pub trait Predicate: Send + Sync {
    fn check(&self, value: &Value) -> (bool, Option<PredicateError>);
}

impl<F> Predicate for F
where
    F: Fn(&Value) -> (bool, Option<PredicateError>) + Send + Sync,
{
    fn check(&self, value: &Value) -> (bool, Option<PredicateError>) {
        self(value)
    }
}

/// Predicate built from a `Result`-returning closure. See [`from_result`].
pub struct ResultPredicate<F>(F);

impl<F> Predicate for ResultPredicate<F>
where
    F: Fn(&Value) -> Result<(), PredicateError> + Send + Sync,
{
    fn check(&self, value: &Value) -> (bool, Option<PredicateError>) {
        match (self.0)(value) {
            Ok(()) => (true, None),
            Err(e) => (false, Some(e)),
        }
    }
}

/// Adapt `Ok(())` to `(true, None)` and `Err(e)` to `(false, Some(e))`.
pub fn from_result<F>(f: F) -> ResultPredicate<F>
where
    F: Fn(&Value) -> Result<(), PredicateError> + Send + Sync,
{
    ResultPredicate(f)
}

/// Run the optional predicate against an already type-checked value.
///
/// No predicate is a pass.
pub fn run(value: &Value, predicate: Option<&dyn Predicate>) -> Verdict {
    let Some(predicate) = predicate else {
        return Verdict::pass();
    };
    let (valid, error) = predicate.check(value);
    let verdict = Verdict::from_parts(valid, error.map(ValidationError::Predicate));
    if !verdict.is_consistent() {
        tracing::debug!(
            valid,
            has_error = verdict.error().is_some(),
            "predicate returned an inconsistent result; forwarding unchanged"
        );
    }
    verdict
}
