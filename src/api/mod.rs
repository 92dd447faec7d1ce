//! API layer
//!
//! The line-oriented request/response envelope the CLI serves: one JSON
//! request in, one JSON response out. Error codes from the service pass
//! through unchanged.
//!
//! # Supported Operations
//!
//! - query
//! - explain
//! - validate

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiErrorCode, ApiResult};
pub use handler::ApiHandler;
pub use request::{Op, Request};
pub use response::{ErrorResponse, Response, SuccessResponse};
