//! Service response types
//!
//! JSON-serializable results for the three service operations. Field names
//! follow the wire contract (`naturalQuery`, `translatedSQL`, ...).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a full classify → render → execute pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessOutcome {
    pub natural_query: String,
    pub sql_query: String,
    pub result: Vec<Value>,
}

/// One step of the fixed explain pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainStep {
    pub step: u32,
    pub description: String,
}

/// Pipeline description produced by `explain`; no execution happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub steps: Vec<ExplainStep>,
    pub original_query: String,
    #[serde(rename = "translatedSQL")]
    pub translated_sql: String,
}

/// Validity verdict with a fixed human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub is_valid: bool,
    pub feedback: String,
}
