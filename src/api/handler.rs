//! API request handler
//!
//! Parses the envelope, dispatches to the query service, and wraps the
//! outcome. Handler errors never escape as panics or process failures;
//! every request gets a response.

use serde_json::Value;

use crate::observability::Logger;
use crate::service::QueryService;

use super::errors::ApiError;
use super::request::{Op, Request};
use super::response::Response;

/// Dispatches parsed requests to a query service.
pub struct ApiHandler {
    service: QueryService,
    log_requests: bool,
}

impl ApiHandler {
    /// Create a handler over the given service.
    pub fn new(service: QueryService) -> Self {
        Self {
            service,
            log_requests: false,
        }
    }

    /// Enable per-request logging. Off by default.
    pub fn with_request_logging(mut self, enabled: bool) -> Self {
        self.log_requests = enabled;
        self
    }

    /// Handle a raw JSON request string.
    pub fn handle(&self, json_request: &str) -> Response {
        let request = match Request::parse(json_request) {
            Ok(r) => r,
            Err(e) => {
                if self.log_requests {
                    Logger::warn("REQUEST_REJECTED", &[("code", e.code().code())]);
                }
                return Response::error(&e);
            }
        };

        let outcome = self.dispatch(&request);

        if self.log_requests {
            match &outcome {
                Ok(_) => Logger::info("REQUEST_COMPLETE", &[("op", op_name(request.op))]),
                Err(e) => Logger::warn(
                    "REQUEST_FAILED",
                    &[("code", e.code().code()), ("op", op_name(request.op))],
                ),
            }
        }

        match outcome {
            Ok(data) => Response::success(data),
            Err(e) => Response::error(&e),
        }
    }

    fn dispatch(&self, request: &Request) -> Result<Value, ApiError> {
        match request.op {
            Op::Query => {
                let outcome = self.service.process(&request.query)?;
                serialize(&outcome)
            }
            Op::Explain => serialize(&self.service.explain(&request.query)),
            Op::Validate => serialize(&self.service.validate(&request.query)),
        }
    }
}

fn serialize<T: serde::Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::internal(format!("Response serialization failed: {}", e)))
}

fn op_name(op: Op) -> &'static str {
    match op {
        Op::Query => "query",
        Op::Explain => "explain",
        Op::Validate => "validate",
    }
}
