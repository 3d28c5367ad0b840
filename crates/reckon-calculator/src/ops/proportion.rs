//! Proportion tool: each value's share of the list total.

use serde::{Deserialize, Serialize};

use reckon_types::{FieldSpec, FieldType};

use crate::format::{proportion_item_display, round_to};
use crate::handler::{Arguments, HandlerResult, ToolHandler};
use crate::outcome::ToolResult;

/// Success payload of the `proportion` tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProportionResult {
    /// The input values, echoed back.
    pub values: Vec<f64>,
    /// Sum of the input values.
    pub total: f64,
    /// Per-value share of the total, rounded to four decimals.
    pub proportions: Vec<f64>,
    /// Per-value share as a percentage, rounded to two decimals.
    pub percentages: Vec<f64>,
    /// One display line per value, 1-indexed.
    pub formatted: Vec<String>,
}

/// Shares of the list total, one per input value.
///
/// `normalize` requests a second pass dividing each proportion by the sum of
/// the already-computed proportions. With an exact total that pass is a
/// mathematical no-op, but callers observe its floating-point effects, so it
/// is performed literally rather than simplified away.
pub fn proportions_of(values: &[f64], normalize: bool) -> ToolResult {
    if values.is_empty() {
        return ToolResult::failure("Values list cannot be empty");
    }
    let total: f64 = values.iter().sum();
    if total == 0.0 {
        return ToolResult::failure("Sum of values cannot be zero");
    }

    let proportions = compute_proportions(values, total, normalize);
    let percentages: Vec<f64> = proportions.iter().map(|p| p * 100.0).collect();

    let formatted = values
        .iter()
        .zip(&percentages)
        .enumerate()
        .map(|(i, (value, pct))| proportion_item_display(i, *value, *pct))
        .collect();

    ProportionResult {
        values: values.to_vec(),
        total,
        proportions: proportions.iter().map(|p| round_to(*p, 4)).collect(),
        percentages: percentages.iter().map(|p| round_to(*p, 2)).collect(),
        formatted,
    }
    .into()
}

/// Proportions before display rounding. Kept as two sequential division
/// passes when `normalize` is set.
fn compute_proportions(values: &[f64], total: f64, normalize: bool) -> Vec<f64> {
    let mut proportions: Vec<f64> = values.iter().map(|v| v / total).collect();
    if normalize {
        let sum: f64 = proportions.iter().sum();
        proportions = proportions.iter().map(|p| p / sum).collect();
    }
    proportions
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "values", field_type: FieldType::NumberArray, required: true },
    FieldSpec { name: "normalize", field_type: FieldType::Boolean, required: false },
];

/// Handler for the `proportion` kind.
#[derive(Debug, Default)]
pub struct ProportionHandler;

impl ToolHandler for ProportionHandler {
    fn kind(&self) -> &str {
        "proportion"
    }

    fn description(&self) -> &str {
        "Calculate proportions for a list of values"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn calculate(&self, args: &Arguments<'_>) -> HandlerResult {
        let values = args.get_number_array("values")?;
        let normalize = args.get_bool_or("normalize", false)?;
        Ok(proportions_of(&values, normalize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unrounded_proportions_sum_to_one() {
        let values = [3.0, 1.0, 7.0, 9.0];
        let total: f64 = values.iter().sum();
        let proportions = compute_proportions(&values, total, false);
        let sum: f64 = proportions.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_is_a_second_division_pass() {
        let values = [0.1, 0.2, 0.3];
        let total: f64 = values.iter().sum();
        let single = compute_proportions(&values, total, false);
        let normalized = compute_proportions(&values, total, true);
        let sum: f64 = single.iter().sum();
        let expected: Vec<f64> = single.iter().map(|p| p / sum).collect();
        assert_eq!(normalized, expected);
    }

    proptest! {
        #[test]
        fn proportions_sum_to_one_for_positive_inputs(
            values in proptest::collection::vec(0.1f64..1e4, 1..8)
        ) {
            let total: f64 = values.iter().sum();
            let proportions = compute_proportions(&values, total, false);
            let sum: f64 = proportions.iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
        }

        #[test]
        fn normalize_is_idempotent(
            values in proptest::collection::vec(0.1f64..1e4, 1..8)
        ) {
            let total: f64 = values.iter().sum();
            let once = compute_proportions(&values, total, true);
            let sum: f64 = once.iter().sum();
            let twice: Vec<f64> = once.iter().map(|p| p / sum).collect();
            for (a, b) in once.iter().zip(&twice) {
                prop_assert!((a - b).abs() < 1e-12);
            }
        }
    }
}
