//! # Rule Descriptors
//!
//! A `FieldDescriptor` is the serializable half of a [`FieldSpec`]: name,
//! presence and type, without the predicate. Rule sets can live in JSON
//! or YAML configuration and be turned into specs at startup, with
//! predicates attached in code afterwards.
//!
//! ```yaml
//! - field_name: user_id
//!   required: true
//!   type: INTEGER
//! - field_name: nickname
//!   type: STRING
//! ```

use paramval_core::{LogicalType, ParamvalError};
use serde::{Deserialize, Serialize};

use crate::spec::FieldSpec;

/// Predicate-free description of one field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDescriptor {
    /// Key looked up in the document.
    pub field_name: String,
    /// Fail when the key is absent. Defaults to `false`.
    #[serde(default)]
    pub required: bool,
    /// Type constraint. Defaults to `ANY`.
    #[serde(default, rename = "type")]
    pub logical_type: LogicalType,
}

impl FieldDescriptor {
    /// Parse a JSON array of descriptors.
    ///
    /// # Errors
    ///
    /// Returns `ParamvalError::Descriptor` on malformed input, unknown keys,
    /// or unknown type names.
    pub fn list_from_json(text: &str) -> Result<Vec<Self>, ParamvalError> {
        serde_json::from_str(text)
            .map_err(|e| ParamvalError::Descriptor(format!("invalid JSON descriptor list: {e}")))
    }

    /// Parse a YAML sequence of descriptors.
    ///
    /// # Errors
    ///
    /// Same conditions as [`list_from_json`](Self::list_from_json).
    pub fn list_from_yaml(text: &str) -> Result<Vec<Self>, ParamvalError> {
        serde_yaml::from_str(text)
            .map_err(|e| ParamvalError::Descriptor(format!("invalid YAML descriptor list: {e}")))
    }

    /// Build a spec with no predicate.
    pub fn to_spec(&self) -> FieldSpec {
        FieldSpec::new(self.field_name.clone())
            .set_required(self.required)
            .of_type(self.logical_type)
    }
}

impl From<FieldDescriptor> for FieldSpec {
    fn from(d: FieldDescriptor) -> Self {
        FieldSpec::new(d.field_name)
            .set_required(d.required)
            .of_type(d.logical_type)
    }
}

/// Drops the predicate, if any.
impl From<&FieldSpec> for FieldDescriptor {
    fn from(spec: &FieldSpec) -> Self {
        Self {
            field_name: spec.field_name().to_string(),
            required: spec.is_required(),
            logical_type: spec.logical_type(),
        }
    }
}
