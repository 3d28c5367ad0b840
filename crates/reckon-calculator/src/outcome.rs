//! The success/failure result union shared by every handler.

use serde::{Deserialize, Serialize};

use crate::ops::arithmetic::ArithmeticResult;
use crate::ops::growth::{MomResult, YoyResult};
use crate::ops::percentage::PercentageResult;
use crate::ops::proportion::ProportionResult;

/// Outcome of a single calculation.
///
/// Exactly one side is ever populated: a kind-specific success payload, or a
/// failure carrying one human-readable message. The untagged representation
/// serializes a failure as `{"error": "..."}` and a success as the bare
/// payload object. `Failure` is listed first so that an error object never
/// deserializes as a payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ToolResult {
    /// Handled validation failure, or an item-level fault in a batch.
    Failure {
        /// What was wrong with the request.
        error: String,
    },
    /// Successful calculation payload.
    Success(ToolOutput),
}

impl ToolResult {
    /// Builds a failure result from a message.
    pub fn failure(message: impl Into<String>) -> Self {
        ToolResult::Failure { error: message.into() }
    }

    /// Whether this result carries a success payload.
    pub fn is_success(&self) -> bool {
        matches!(self, ToolResult::Success(_))
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            ToolResult::Failure { error } => Some(error),
            ToolResult::Success(_) => None,
        }
    }
}

/// Kind-specific success payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ToolOutput {
    /// Arithmetic result
    Arithmetic(ArithmeticResult),
    /// Year-over-year growth result
    Yoy(YoyResult),
    /// Month-over-month growth result
    Mom(MomResult),
    /// Percentage result
    Percentage(PercentageResult),
    /// Proportion result
    Proportion(ProportionResult),
}

impl From<ArithmeticResult> for ToolResult {
    fn from(payload: ArithmeticResult) -> Self {
        ToolResult::Success(ToolOutput::Arithmetic(payload))
    }
}

impl From<YoyResult> for ToolResult {
    fn from(payload: YoyResult) -> Self {
        ToolResult::Success(ToolOutput::Yoy(payload))
    }
}

impl From<MomResult> for ToolResult {
    fn from(payload: MomResult) -> Self {
        ToolResult::Success(ToolOutput::Mom(payload))
    }
}

impl From<PercentageResult> for ToolResult {
    fn from(payload: PercentageResult) -> Self {
        ToolResult::Success(ToolOutput::Percentage(payload))
    }
}

impl From<ProportionResult> for ToolResult {
    fn from(payload: ProportionResult) -> Self {
        ToolResult::Success(ToolOutput::Proportion(payload))
    }
}
