//! # Error Types
//!
//! Errors raised while building the inputs of a validation: decoding a
//! document into a [`ValueMap`](crate::ValueMap) and loading rule
//! configuration. Validation outcomes themselves live in `paramval-rules`.

use thiserror::Error;

use crate::value::ValueKind;

/// Top-level error type for configuration and input handling.
#[derive(Error, Debug)]
pub enum ParamvalError {
    /// A logical type name did not match any known type.
    #[error("unknown logical type: {0:?}")]
    UnknownType(String),

    /// A document could not be decoded into a value map.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A rule descriptor could not be parsed.
    #[error("descriptor error: {0}")]
    Descriptor(String),
}

/// Error while decoding a document into a value map.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The input was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value was not an object.
    #[error("expected a JSON object at the document root but found {found}")]
    NotAnObject {
        /// Runtime kind of the root value.
        found: ValueKind,
    },
}
