//! End-to-End Service Scenarios
//!
//! Full pipeline runs against a freshly seeded store: three sales rows
//! (amounts 100, 200, 150) and three customer rows.

use nlquery::classifier::classify;
use nlquery::interpreter::Interpreter;
use nlquery::renderer::render;
use nlquery::service::{QueryService, ServiceError};
use nlquery::store::{TableName, TableStore};
use serde_json::json;

fn service() -> QueryService {
    QueryService::new(TableStore::seeded())
}

// =============================================================================
// Process
// =============================================================================

/// "how many sales are there" counts the three seeded sales rows.
#[test]
fn test_count_sales_scenario() {
    let outcome = service().process("how many sales are there").unwrap();
    assert_eq!(outcome.natural_query, "how many sales are there");
    assert_eq!(outcome.sql_query, "SELECT COUNT(*) as count FROM sales");
    assert_eq!(outcome.result, vec![json!({ "count": 3 })]);
}

/// "list customers" returns all three seeded rows in insertion order.
#[test]
fn test_list_customers_scenario() {
    let store = TableStore::seeded();
    let expected = store.rows(TableName::Customers).to_vec();

    let outcome = service().process("list customers").unwrap();
    assert_eq!(outcome.sql_query, "SELECT * FROM customers");
    assert_eq!(outcome.result, expected);
    assert_eq!(outcome.result.len(), 3);
}

/// Disallowed keywords are rejected with a validation error.
#[test]
fn test_delete_is_rejected() {
    let err = service().process("delete all sales").unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

/// Empty input is rejected, not executed.
#[test]
fn test_empty_input_is_rejected() {
    let err = service().process("").unwrap_err();
    assert!(err.is_validation());
}

/// A products selection succeeds with an empty result set: the classifier
/// can pick products but the interpreter has no rows for it.
#[test]
fn test_products_capability_gap_is_tolerated() {
    let outcome = service().process("show me products").unwrap();
    assert_eq!(outcome.sql_query, "SELECT * FROM products");
    assert!(outcome.result.is_empty());
}

// =============================================================================
// Aggregate Pipeline
// =============================================================================
// These utterances never name a table literally, so the validity gate in
// `process` rejects them; the translation itself still must produce the
// fixed sales aggregates. Tested at the classify → render → execute level.

/// "what is the total revenue" sums sales.amount.
#[test]
fn test_total_revenue_scenario() {
    let store = TableStore::seeded();
    let query = render(&classify("what is the total revenue"));
    assert_eq!(query, "SELECT SUM(amount) as sum FROM sales");

    let result = Interpreter::new(&store).execute(&query).unwrap();
    assert_eq!(result, vec![json!({ "total": 450 })]);
}

/// "average sale amount" computes the mean of sales.amount.
#[test]
fn test_average_sale_scenario() {
    let store = TableStore::seeded();
    let query = render(&classify("average sale amount"));
    assert_eq!(query, "SELECT AVG(amount) as avg FROM sales");

    let result = Interpreter::new(&store).execute(&query).unwrap();
    assert_eq!(result, vec![json!({ "average": 150.0 })]);
}

// =============================================================================
// Explain
// =============================================================================

/// Explain renders without executing and reports the fixed pipeline.
#[test]
fn test_explain_shape() {
    let explanation = service().explain("how many customers");
    assert_eq!(explanation.original_query, "how many customers");
    assert_eq!(
        explanation.translated_sql,
        "SELECT COUNT(*) as count FROM customers"
    );

    let steps: Vec<(u32, &str)> = explanation
        .steps
        .iter()
        .map(|s| (s.step, s.description.as_str()))
        .collect();
    assert_eq!(
        steps,
        vec![
            (1, "Natural language parsing"),
            (2, "Entity recognition"),
            (3, "SQL translation"),
            (4, "Query optimization"),
        ]
    );
}

/// Explain never fails, even for rejected utterances.
#[test]
fn test_explain_is_total() {
    let explanation = service().explain("delete all sales");
    assert_eq!(explanation.translated_sql, "SELECT * FROM sales");
}

// =============================================================================
// Validate
// =============================================================================

/// Validate returns the fixed messages and never fails.
#[test]
fn test_validate_messages() {
    let ok = service().validate("list customers");
    assert!(ok.is_valid);
    assert_eq!(ok.feedback, "Query is valid");

    let bad = service().validate("delete all sales");
    assert!(!bad.is_valid);
    assert_eq!(bad.feedback, "Query contains unsupported operations");
}

/// The empty utterance is invalid.
#[test]
fn test_validate_empty() {
    assert!(!service().validate("").is_valid);
}

// =============================================================================
// Wire Format
// =============================================================================

/// Responses serialize with the contract field names.
#[test]
fn test_response_field_names() {
    let outcome = service().process("list customers").unwrap();
    let value = serde_json::to_value(&outcome).unwrap();
    assert!(value.get("naturalQuery").is_some());
    assert!(value.get("sqlQuery").is_some());
    assert!(value.get("result").is_some());

    let explanation = serde_json::to_value(service().explain("list customers")).unwrap();
    assert!(explanation.get("originalQuery").is_some());
    assert!(explanation.get("translatedSQL").is_some());

    let verdict = serde_json::to_value(service().validate("list customers")).unwrap();
    assert!(verdict.get("isValid").is_some());
    assert!(verdict.get("feedback").is_some());
}
