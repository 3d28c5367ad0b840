//! Percentage tool: what share of `whole` does `part` represent.

use serde::{Deserialize, Serialize};

use reckon_types::{FieldSpec, FieldType};

use crate::format::{percentage_display, round_to};
use crate::handler::{Arguments, HandlerResult, ToolHandler};
use crate::outcome::ToolResult;

/// Success payload of the `percentage` tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PercentageResult {
    /// The part value.
    pub part: f64,
    /// The whole value.
    pub whole: f64,
    /// Share of `|whole|`, rounded to two decimals in the percentage branch,
    /// unrounded fractional rate otherwise.
    pub percentage: f64,
    /// Display string, always two decimals with a conditional `%` suffix.
    pub formatted: String,
    /// Raw signed ratio `part / whole`, never rounded.
    pub ratio: f64,
}

/// Percentage of `whole` represented by `part`.
///
/// The percentage is taken against `|whole|`; the `ratio` field keeps the
/// sign of `whole`. Rounding follows the same display/number asymmetry as the
/// growth tools.
pub fn percentage_of(part: f64, whole: f64, as_percentage: bool) -> ToolResult {
    if whole == 0.0 {
        return ToolResult::failure("Whole value cannot be zero");
    }

    let mut percentage = (part / whole.abs()) * 100.0;
    if !as_percentage {
        percentage /= 100.0;
    }

    let formatted = percentage_display(percentage, as_percentage);
    let percentage = if as_percentage { round_to(percentage, 2) } else { percentage };

    PercentageResult { part, whole, percentage, formatted, ratio: part / whole }.into()
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "part", field_type: FieldType::Number, required: true },
    FieldSpec { name: "whole", field_type: FieldType::Number, required: true },
    FieldSpec { name: "as_percentage", field_type: FieldType::Boolean, required: false },
];

/// Handler for the `percentage` kind.
#[derive(Debug, Default)]
pub struct PercentageHandler;

impl ToolHandler for PercentageHandler {
    fn kind(&self) -> &str {
        "percentage"
    }

    fn description(&self) -> &str {
        "Calculate percentage (part of whole)"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn calculate(&self, args: &Arguments<'_>) -> HandlerResult {
        let part = args.get_number("part")?;
        let whole = args.get_number("whole")?;
        let as_percentage = args.get_bool_or("as_percentage", true)?;
        Ok(percentage_of(part, whole, as_percentage))
    }
}
