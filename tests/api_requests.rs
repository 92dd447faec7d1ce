//! API Envelope Tests
//!
//! Request parsing, response envelopes, and error code mapping for the
//! serve-mode line protocol, plus configuration file loading.

use nlquery::api::{ApiHandler, Op, Request, Response};
use nlquery::cli::Config;
use nlquery::service::QueryService;
use nlquery::store::TableStore;
use serde_json::Value;
use std::io::Write;

fn handler() -> ApiHandler {
    ApiHandler::new(QueryService::new(TableStore::seeded()))
}

fn parse_response(response: &Response) -> Value {
    serde_json::from_str(&response.to_json()).unwrap()
}

// =============================================================================
// Request Parsing
// =============================================================================

#[test]
fn test_parse_valid_request() {
    let request = Request::parse(r#"{"op":"query","query":"list customers"}"#).unwrap();
    assert_eq!(request.op, Op::Query);
    assert_eq!(request.query, "list customers");
}

#[test]
fn test_parse_rejects_unknown_op() {
    let err = Request::parse(r#"{"op":"drop","query":"x"}"#).unwrap_err();
    assert_eq!(err.code().code(), "NLQ_UNKNOWN_OPERATION");
}

#[test]
fn test_parse_rejects_missing_query() {
    let err = Request::parse(r#"{"op":"validate"}"#).unwrap_err();
    assert_eq!(err.code().code(), "NLQ_INVALID_REQUEST");
}

#[test]
fn test_parse_rejects_malformed_json() {
    let err = Request::parse("not json").unwrap_err();
    assert_eq!(err.code().code(), "NLQ_INVALID_REQUEST");
}

// =============================================================================
// Handler Dispatch
// =============================================================================

/// A query request returns the full outcome under the ok envelope.
#[test]
fn test_query_request_round_trip() {
    let response = handler().handle(r#"{"op":"query","query":"how many sales are there"}"#);
    assert!(response.is_success());

    let body = parse_response(&response);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["data"]["sqlQuery"], "SELECT COUNT(*) as count FROM sales");
    assert_eq!(body["data"]["result"][0]["count"], 3);
}

/// An unsupported utterance maps to the validation error code.
#[test]
fn test_rejected_query_maps_to_validation_code() {
    let response = handler().handle(r#"{"op":"query","query":"delete all sales"}"#);
    assert!(!response.is_success());

    let body = parse_response(&response);
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], "NLQ_VALIDATION_FAILED");
}

/// Validate never fails, even on input that would fail a query request.
#[test]
fn test_validate_request_always_succeeds() {
    let response = handler().handle(r#"{"op":"validate","query":"delete all sales"}"#);
    assert!(response.is_success());

    let body = parse_response(&response);
    assert_eq!(body["data"]["isValid"], false);
}

/// Explain returns the four-step pipeline without touching the store.
#[test]
fn test_explain_request() {
    let response = handler().handle(r#"{"op":"explain","query":"list customers"}"#);
    let body = parse_response(&response);
    assert_eq!(body["data"]["translatedSQL"], "SELECT * FROM customers");
    assert_eq!(body["data"]["steps"].as_array().unwrap().len(), 4);
}

/// A malformed line still produces an error response, not a crash.
#[test]
fn test_malformed_line_gets_error_response() {
    let response = handler().handle("{{{");
    let body = parse_response(&response);
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], "NLQ_INVALID_REQUEST");
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.simulated_latency_ms, 0);
    assert!(!config.log_requests);
}

#[test]
fn test_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"simulated_latency_ms": 25, "log_requests": true}}"#).unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.simulated_latency_ms, 25);
    assert!(config.log_requests);
}

#[test]
fn test_config_rejects_excessive_latency() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"simulated_latency_ms": 120000}}"#).unwrap();

    let err = Config::load(file.path()).unwrap_err();
    assert_eq!(err.code().code(), "NLQ_CLI_CONFIG_ERROR");
}

#[test]
fn test_config_rejects_missing_file() {
    let err = Config::load(std::path::Path::new("/nonexistent/nlquery.json")).unwrap_err();
    assert_eq!(err.code().code(), "NLQ_CLI_CONFIG_ERROR");
}
