//! Year-over-year and month-over-month growth tools.
//!
//! The two tools share one computation and differ only in their period label,
//! zero-value message and payload field names.
//!
//! Rounding contract: with `as_percentage = true` the returned growth figure
//! is rounded to two decimal places; with `as_percentage = false` the raw
//! fractional rate is returned unrounded. The `formatted` string always shows
//! two decimals of the post-division value either way — the display and the
//! number deliberately disagree in the fractional branch.

use serde::{Deserialize, Serialize};

use reckon_types::{FieldSpec, FieldType};

use crate::format::{growth_display, round_to};
use crate::handler::{Arguments, HandlerResult, ToolHandler};
use crate::outcome::ToolResult;

/// Direction of the change between the two compared periods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    /// Current period is above the previous one.
    #[serde(rename = "increase")]
    Increase,
    /// Current period is below the previous one.
    #[serde(rename = "decrease")]
    Decrease,
    /// The two periods are equal.
    #[serde(rename = "no change")]
    NoChange,
}

/// Success payload of the `yoy` tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YoyResult {
    /// Current period value.
    pub current_value: f64,
    /// Same period last year.
    pub previous_year_value: f64,
    /// `current - previous`.
    pub absolute_change: f64,
    /// Growth figure, see the module rounding contract.
    pub yoy_growth: f64,
    /// Display string, e.g. `"YoY: 20.00%"`.
    pub formatted: String,
    /// Direction of the change.
    pub direction: Direction,
}

/// Success payload of the `mom` tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MomResult {
    /// Current month value.
    pub current_value: f64,
    /// Previous month value.
    pub previous_month_value: f64,
    /// `current - previous`.
    pub absolute_change: f64,
    /// Growth figure, see the module rounding contract.
    pub mom_growth: f64,
    /// Display string, e.g. `"MoM: 10.00%"`.
    pub formatted: String,
    /// Direction of the change.
    pub direction: Direction,
}

/// Year-over-year growth of `current_value` against `previous_year_value`.
pub fn year_over_year(
    current_value: f64,
    previous_year_value: f64,
    as_percentage: bool,
) -> ToolResult {
    if previous_year_value == 0.0 {
        return ToolResult::failure("Previous year value cannot be zero");
    }
    let parts = compute(current_value, previous_year_value, as_percentage, "YoY");
    YoyResult {
        current_value,
        previous_year_value,
        absolute_change: parts.change,
        yoy_growth: parts.growth,
        formatted: parts.formatted,
        direction: parts.direction,
    }
    .into()
}

/// Month-over-month growth of `current_value` against `previous_month_value`.
pub fn month_over_month(
    current_value: f64,
    previous_month_value: f64,
    as_percentage: bool,
) -> ToolResult {
    if previous_month_value == 0.0 {
        return ToolResult::failure("Previous month value cannot be zero");
    }
    let parts = compute(current_value, previous_month_value, as_percentage, "MoM");
    MomResult {
        current_value,
        previous_month_value,
        absolute_change: parts.change,
        mom_growth: parts.growth,
        formatted: parts.formatted,
        direction: parts.direction,
    }
    .into()
}

struct GrowthParts {
    change: f64,
    growth: f64,
    formatted: String,
    direction: Direction,
}

fn compute(current: f64, previous: f64, as_percentage: bool, label: &str) -> GrowthParts {
    let change = current - previous;
    let mut growth = (change / previous.abs()) * 100.0;
    if !as_percentage {
        growth /= 100.0;
    }

    // The display string is built from the unrounded value.
    let formatted = growth_display(label, growth, as_percentage);
    let growth = if as_percentage { round_to(growth, 2) } else { growth };

    let direction = if change > 0.0 {
        Direction::Increase
    } else if change < 0.0 {
        Direction::Decrease
    } else {
        Direction::NoChange
    };

    GrowthParts { change, growth, formatted, direction }
}

const YOY_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "current_value", field_type: FieldType::Number, required: true },
    FieldSpec { name: "previous_year_value", field_type: FieldType::Number, required: true },
    FieldSpec { name: "as_percentage", field_type: FieldType::Boolean, required: false },
];

const MOM_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "current_value", field_type: FieldType::Number, required: true },
    FieldSpec { name: "previous_month_value", field_type: FieldType::Number, required: true },
    FieldSpec { name: "as_percentage", field_type: FieldType::Boolean, required: false },
];

/// Handler for the `yoy` kind.
#[derive(Debug, Default)]
pub struct YoyHandler;

impl ToolHandler for YoyHandler {
    fn kind(&self) -> &str {
        "yoy"
    }

    fn description(&self) -> &str {
        "Calculate Year-over-Year (YoY) growth"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        YOY_FIELDS
    }

    fn calculate(&self, args: &Arguments<'_>) -> HandlerResult {
        let current = args.get_number("current_value")?;
        let previous = args.get_number("previous_year_value")?;
        let as_percentage = args.get_bool_or("as_percentage", true)?;
        Ok(year_over_year(current, previous, as_percentage))
    }
}

/// Handler for the `mom` kind.
#[derive(Debug, Default)]
pub struct MomHandler;

impl ToolHandler for MomHandler {
    fn kind(&self) -> &str {
        "mom"
    }

    fn description(&self) -> &str {
        "Calculate Month-over-Month (MoM) growth"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        MOM_FIELDS
    }

    fn calculate(&self, args: &Arguments<'_>) -> HandlerResult {
        let current = args.get_number("current_value")?;
        let previous = args.get_number("previous_month_value")?;
        let as_percentage = args.get_bool_or("as_percentage", true)?;
        Ok(month_over_month(current, previous, as_percentage))
    }
}
