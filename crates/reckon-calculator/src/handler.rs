//! The handler seam: the `ToolHandler` trait and typed argument accessors.

use std::collections::HashMap;

use anyhow::Result;
use reckon_types::{FieldSpec, FieldType, ToolValue};

use crate::error::CalcError;
use crate::outcome::ToolResult;

/// Result of a handler invocation.
///
/// Data-level validation failures come back as `Ok(ToolResult::Failure(..))`;
/// the `Err` side carries argument-extraction faults (missing field, wrong
/// type). Standalone callers may propagate the fault; the batch dispatcher
/// catches it at the item boundary.
pub type HandlerResult = Result<ToolResult>;

/// A named calculation tool.
///
/// Handlers are stateless and thread-safe; `calculate` never panics for
/// malformed input and has no side effects.
pub trait ToolHandler: Send + Sync {
    /// The kind discriminator this handler is registered under.
    fn kind(&self) -> &str;

    /// One-line description for tool enumeration.
    fn description(&self) -> &str;

    /// Declarative argument signature for tool enumeration.
    fn fields(&self) -> &'static [FieldSpec];

    /// Runs the calculation against the extracted arguments.
    fn calculate(&self, args: &Arguments<'_>) -> HandlerResult;
}

/// Read-only, typed view over a request's kind-specific fields.
#[derive(Debug)]
pub struct Arguments<'a> {
    fields: &'a HashMap<String, ToolValue>,
}

impl<'a> Arguments<'a> {
    /// Wraps a request's field map.
    pub fn new(fields: &'a HashMap<String, ToolValue>) -> Self {
        Self { fields }
    }

    /// Gets a required numeric field.
    pub fn get_number(&self, name: &str) -> Result<f64, CalcError> {
        match self.fields.get(name) {
            Some(value) => value.as_number().ok_or_else(|| CalcError::WrongType {
                name: name.to_string(),
                expected: FieldType::Number,
                found: value.type_name(),
            }),
            None => Err(CalcError::MissingField {
                name: name.to_string(),
                expected: FieldType::Number,
            }),
        }
    }

    /// Gets a required string field.
    pub fn get_str(&self, name: &str) -> Result<&'a str, CalcError> {
        match self.fields.get(name) {
            Some(ToolValue::String(s)) => Ok(s),
            Some(value) => Err(CalcError::WrongType {
                name: name.to_string(),
                expected: FieldType::String,
                found: value.type_name(),
            }),
            None => Err(CalcError::MissingField {
                name: name.to_string(),
                expected: FieldType::String,
            }),
        }
    }

    /// Gets an optional boolean field, falling back to `default` when absent.
    /// A present-but-non-boolean value is still a fault.
    pub fn get_bool_or(&self, name: &str, default: bool) -> Result<bool, CalcError> {
        match self.fields.get(name) {
            Some(value) => value.as_bool().ok_or_else(|| CalcError::WrongType {
                name: name.to_string(),
                expected: FieldType::Boolean,
                found: value.type_name(),
            }),
            None => Ok(default),
        }
    }

    /// Gets a required array-of-numbers field.
    pub fn get_number_array(&self, name: &str) -> Result<Vec<f64>, CalcError> {
        match self.fields.get(name) {
            Some(ToolValue::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_number().ok_or_else(|| CalcError::WrongType {
                        name: name.to_string(),
                        expected: FieldType::NumberArray,
                        found: item.type_name(),
                    })
                })
                .collect(),
            Some(value) => Err(CalcError::WrongType {
                name: name.to_string(),
                expected: FieldType::NumberArray,
                found: value.type_name(),
            }),
            None => Err(CalcError::MissingField {
                name: name.to_string(),
                expected: FieldType::NumberArray,
            }),
        }
    }
}
