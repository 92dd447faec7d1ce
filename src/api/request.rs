//! API request types
//!
//! JSON request parsing for the three supported operations.

use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};

/// Operation requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    Query,
    Explain,
    Validate,
}

/// Raw request for parsing
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawRequest {
    op: String,
    #[serde(default)]
    query: Option<String>,
}

/// A parsed caller request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub op: Op,
    pub query: String,
}

impl Request {
    /// Parse a request from a JSON string.
    ///
    /// The `query` field must be present even for `validate`; an empty
    /// string is accepted there and yields an invalid verdict downstream.
    pub fn parse(json: &str) -> ApiResult<Self> {
        let raw: RawRequest = serde_json::from_str(json)
            .map_err(|e| ApiError::invalid_request(format!("Invalid JSON: {}", e)))?;

        let op = match raw.op.as_str() {
            "query" => Op::Query,
            "explain" => Op::Explain,
            "validate" => Op::Validate,
            other => return Err(ApiError::unknown_operation(other)),
        };

        let query = raw
            .query
            .ok_or_else(|| ApiError::invalid_request("Missing query"))?;

        Ok(Request { op, query })
    }
}
