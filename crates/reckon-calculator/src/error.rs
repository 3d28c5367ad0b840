//! Fault types for handler argument extraction.
//!
//! These cover the *unexpected fault* tier: a required field that is absent,
//! or a field carrying a value of the wrong type. Data-level validation
//! failures (division by zero, empty value lists, ...) are not errors in this
//! sense — handlers report those as `ToolResult::Failure` payloads.

use reckon_types::FieldType;
use thiserror::Error;

/// Fault raised while extracting a handler's arguments from a request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A required field was not present in the request.
    #[error("required field '{name}' ({expected}) was not provided")]
    MissingField {
        /// Wire name of the field.
        name: String,
        /// Type the handler expected.
        expected: FieldType,
    },

    /// A field was present but carried a value of the wrong type.
    #[error("field '{name}' has the wrong type: expected {expected}, got {found}")]
    WrongType {
        /// Wire name of the field.
        name: String,
        /// Type the handler expected.
        expected: FieldType,
        /// Type actually found in the request.
        found: &'static str,
    },
}
