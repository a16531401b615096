//! # paramval-core — Foundational Types for Field Validation
//!
//! This crate defines the data model that every validation rule operates
//! on. It depends on nothing internal; `paramval-rules` builds the
//! evaluator on top of it.
//!
//! ## Key Design Principles
//!
//! 1. **Tagged dynamic values.** A decoded document is a [`ValueMap`] of
//!    [`Value`]s, a closed variant over `Null`, `Integer`, `Float`,
//!    `String`, `Bool`, `Array` and `Object`. The runtime kind of a value is
//!    fixed at decode time, so type checks are a tag match.
//!
//! 2. **Null is not absence.** An explicit JSON `null` decodes to
//!    [`Value::Null`]; a missing key is simply not in the map.
//!
//! 3. **Single `LogicalType` enum.** The closed set of shapes a field may be
//!    constrained to. Exhaustive `match` everywhere.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `paramval-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod decode;
pub mod error;
pub mod logical;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use decode::NumberPolicy;
pub use error::{DecodeError, ParamvalError};
pub use logical::{LogicalType, LOGICAL_TYPE_COUNT};
pub use value::{Value, ValueKind, ValueMap};
