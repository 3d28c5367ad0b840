use reckon_calculator::dispatcher::{CalculationRequest, batch_calculate, dispatch};
use reckon_calculator::outcome::{ToolOutput, ToolResult};
use reckon_calculator::registry::HandlerRegistry;
use serde_json::json;

fn arithmetic_request(operation: &str, a: f64, b: f64) -> CalculationRequest {
    CalculationRequest::new("arithmetic")
        .with_field("operation", operation)
        .with_field("a", a)
        .with_field("b", b)
}

#[test]
fn mixed_batch_preserves_order_and_counts_successes() {
    let registry = HandlerRegistry::with_builtins();
    let requests = vec![
        arithmetic_request("add", 10.0, 5.0),
        CalculationRequest::new("yoy")
            .with_field("current_value", 120.0)
            .with_field("previous_year_value", 100.0),
        CalculationRequest::new("compound_interest"),
        arithmetic_request("divide", 10.0, 0.0),
        CalculationRequest::new("proportion").with_field("values", vec![10.0, 20.0, 30.0, 40.0]),
    ];

    let outcome = batch_calculate(&registry, &requests);

    assert_eq!(outcome.total_calculations, 5);
    assert_eq!(outcome.results.len(), 5);
    assert_eq!(outcome.successful, 3);

    // Items come back in input order with the request echoed verbatim.
    for (item, request) in outcome.results.iter().zip(&requests) {
        assert_eq!(&item.calculation, request);
    }

    assert!(outcome.results[0].result.is_success());
    assert!(outcome.results[1].result.is_success());
    assert_eq!(
        outcome.results[2].result.error(),
        Some("Unknown calculation type: compound_interest")
    );
    assert_eq!(
        outcome.results[3].result.error(),
        Some("Division by zero is not allowed")
    );
    assert!(outcome.results[4].result.is_success());
}

#[test]
fn unknown_kind_alone_yields_an_unsuccessful_outcome() {
    let registry = HandlerRegistry::with_builtins();
    let outcome = batch_calculate(&registry, &[CalculationRequest::new("unknown")]);

    assert_eq!(outcome.total_calculations, 1);
    assert_eq!(outcome.successful, 0);
    assert_eq!(
        outcome.results[0].result.error(),
        Some("Unknown calculation type: unknown")
    );
}

#[test]
fn a_faulting_item_does_not_abort_the_rest_of_the_batch() {
    let registry = HandlerRegistry::with_builtins();
    let requests = vec![
        // Missing the required 'b' operand: an extraction fault, not a
        // handled validation failure.
        CalculationRequest::new("arithmetic")
            .with_field("operation", "add")
            .with_field("a", 10.0),
        CalculationRequest::new("mom")
            .with_field("current_value", 110.0)
            .with_field("previous_month_value", 100.0),
    ];

    let outcome = batch_calculate(&registry, &requests);

    assert_eq!(outcome.total_calculations, 2);
    assert_eq!(outcome.successful, 1);
    assert_eq!(
        outcome.results[0].result.error(),
        Some("required field 'b' (number) was not provided")
    );
    let ToolResult::Success(ToolOutput::Mom(out)) = &outcome.results[1].result else {
        panic!("second item should still be processed");
    };
    assert_eq!(out.mom_growth, 10.0);
}

#[test]
fn empty_batch_is_a_valid_noop() {
    let registry = HandlerRegistry::with_builtins();
    let outcome = batch_calculate(&registry, &[]);
    assert_eq!(outcome.total_calculations, 0);
    assert_eq!(outcome.successful, 0);
    assert!(outcome.results.is_empty());
}

#[test]
fn requests_deserialize_from_flat_json_objects() {
    let registry = HandlerRegistry::with_builtins();
    let request: CalculationRequest =
        serde_json::from_value(json!({"kind": "arithmetic", "operation": "add", "a": 10, "b": 5}))
            .unwrap();

    let ToolResult::Success(ToolOutput::Arithmetic(out)) = dispatch(&registry, &request) else {
        panic!("expected success");
    };
    assert_eq!(out.result, 15.0);
}

#[test]
fn batch_outcome_serializes_to_the_wire_shape() {
    let registry = HandlerRegistry::with_builtins();
    let requests =
        vec![arithmetic_request("divide", 10.0, 0.0), arithmetic_request("multiply", 2.0, 3.0)];

    let outcome = batch_calculate(&registry, &requests);
    let wire = serde_json::to_value(&outcome).unwrap();

    assert_eq!(wire["total_calculations"], json!(2));
    assert_eq!(wire["successful"], json!(1));
    // Failures serialize as a bare error object.
    assert_eq!(
        wire["results"][0]["result"],
        json!({"error": "Division by zero is not allowed"})
    );
    // The echoed request is a flat object with the kind discriminator inline.
    assert_eq!(wire["results"][1]["calculation"]["kind"], json!("arithmetic"));
    assert_eq!(wire["results"][1]["calculation"]["a"], json!(2.0));
    assert_eq!(wire["results"][1]["result"]["result"], json!(6.0));
    assert_eq!(wire["results"][1]["result"]["formatted"], json!("2 × 3 = 6"));
}
