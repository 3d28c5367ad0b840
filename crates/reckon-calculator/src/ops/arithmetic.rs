//! Basic arithmetic tool (add, subtract, multiply, divide).
//!
//! The operation name is matched case-insensitively. Division by zero is
//! rejected before the division is performed, never caught afterwards.

use serde::{Deserialize, Serialize};

use reckon_types::{FieldSpec, FieldType};

use crate::format::operator_symbol;
use crate::handler::{Arguments, HandlerResult, ToolHandler};
use crate::outcome::ToolResult;

/// Success payload of the `arithmetic` tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArithmeticResult {
    /// The operation that was performed, lowercased.
    pub operation: String,
    /// First operand.
    pub a: f64,
    /// Second operand.
    pub b: f64,
    /// Computed value.
    pub result: f64,
    /// Display string, e.g. `"10 ÷ 5 = 2"`.
    pub formatted: String,
}

/// Performs `a <operation> b`.
///
/// Returns a failure payload for division by zero and for operation names
/// outside add/subtract/multiply/divide; the unsupported-operation message
/// echoes the name exactly as the caller wrote it.
pub fn evaluate(operation: &str, a: f64, b: f64) -> ToolResult {
    let op = operation.to_lowercase();
    let result = match op.as_str() {
        "add" => a + b,
        "subtract" => a - b,
        "multiply" => a * b,
        "divide" => {
            if b == 0.0 {
                return ToolResult::failure("Division by zero is not allowed");
            }
            a / b
        }
        _ => return ToolResult::failure(format!("Unsupported operation: {operation}")),
    };

    let formatted = format!("{a} {} {b} = {result}", operator_symbol(&op));
    ArithmeticResult { operation: op, a, b, result, formatted }.into()
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "operation", field_type: FieldType::String, required: true },
    FieldSpec { name: "a", field_type: FieldType::Number, required: true },
    FieldSpec { name: "b", field_type: FieldType::Number, required: true },
];

/// Handler for the `arithmetic` kind.
#[derive(Debug, Default)]
pub struct ArithmeticHandler;

impl ToolHandler for ArithmeticHandler {
    fn kind(&self) -> &str {
        "arithmetic"
    }

    fn description(&self) -> &str {
        "Perform basic arithmetic operations (add, subtract, multiply, divide)"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn calculate(&self, args: &Arguments<'_>) -> HandlerResult {
        let operation = args.get_str("operation")?;
        let a = args.get_number("a")?;
        let b = args.get_number("b")?;
        Ok(evaluate(operation, a, b))
    }
}
