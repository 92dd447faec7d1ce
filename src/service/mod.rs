//! Query service
//!
//! Orchestrates the classify → render → execute pipeline:
//! - `process`: full pipeline, fails on invalid utterances
//! - `explain`: classify and render only, no execution
//! - `validate`: validity verdict only, never fails
//!
//! Stateless per request; the only shared data is the injected read-only
//! table store, so requests need no coordination.

mod errors;
mod response;
mod service;

pub use errors::{ServiceError, ServiceResult};
pub use response::{Explanation, ExplainStep, ProcessOutcome, Verdict};
pub use service::QueryService;
