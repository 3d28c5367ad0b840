//! Batch dispatch across the handler registry.
//!
//! Items are independent and processed in input order. A failing item — a
//! handled validation failure, an unknown kind, or an argument-extraction
//! fault — becomes data in the outcome and never aborts the remaining items.
//! `batch_calculate` itself never returns an error to the caller.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use reckon_types::ToolValue;

use crate::handler::Arguments;
use crate::outcome::ToolResult;
use crate::registry::HandlerRegistry;

/// One unit of work, addressed to a handler by its kind discriminator.
///
/// The kind-specific fields are flattened, so a request serializes as one
/// flat object: `{"kind": "arithmetic", "operation": "add", "a": 10, "b": 5}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationRequest {
    /// Which calculation this item requests.
    pub kind: String,
    /// Kind-specific operands.
    #[serde(flatten)]
    pub fields: HashMap<String, ToolValue>,
}

impl CalculationRequest {
    /// Creates a request with no fields.
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into(), fields: HashMap::new() }
    }

    /// Adds one kind-specific field.
    pub fn with_field(mut self, name: &str, value: impl Into<ToolValue>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }
}

/// One request paired with its result, in input order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchItem {
    /// The request, echoed back verbatim.
    pub calculation: CalculationRequest,
    /// What came of it.
    pub result: ToolResult,
}

/// Aggregated outcome of a batch call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchOutcome {
    /// Number of requests in the batch; always equals `results.len()`.
    pub total_calculations: usize,
    /// Number of items whose result is a success payload.
    pub successful: usize,
    /// Per-item outcomes, in input order.
    pub results: Vec<BatchItem>,
}

/// Runs a single request against the registry.
///
/// This is the per-item fault boundary: an unknown kind becomes a failure
/// payload without invoking any handler, and a fault raised during argument
/// extraction is converted into a failure carrying the fault's message.
pub fn dispatch(registry: &HandlerRegistry, request: &CalculationRequest) -> ToolResult {
    let Some(handler) = registry.get(&request.kind) else {
        return ToolResult::failure(format!("Unknown calculation type: {}", request.kind));
    };

    let args = Arguments::new(&request.fields);
    match handler.calculate(&args) {
        Ok(result) => result,
        Err(fault) => {
            warn!(kind = %request.kind, error = %fault, "calculation item faulted");
            ToolResult::failure(fault.to_string())
        }
    }
}

/// Runs every request in input order and aggregates the outcome.
pub fn batch_calculate(
    registry: &HandlerRegistry,
    requests: &[CalculationRequest],
) -> BatchOutcome {
    let mut results = Vec::with_capacity(requests.len());
    let mut successful = 0;

    for request in requests {
        debug!(kind = %request.kind, "dispatching calculation");
        let result = dispatch(registry, request);
        if result.is_success() {
            successful += 1;
        }
        results.push(BatchItem { calculation: request.clone(), result });
    }

    BatchOutcome { total_calculations: requests.len(), successful, results }
}
