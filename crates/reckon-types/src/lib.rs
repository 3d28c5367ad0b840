//! Reckon Types
//!
//! This crate defines the shared types used throughout the Reckon calculation
//! tools: the `ToolValue` wire value, and the `FieldSpec`/`FieldType` pair that
//! handlers use to publish their argument signatures to a tool-registration
//! layer. Keeping them here avoids circular dependencies between crates.

#![deny(warnings)]
#![deny(missing_docs)]

mod types;

pub use types::{FieldSpec, FieldType, ToolValue};
