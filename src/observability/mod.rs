//! Observability
//!
//! Structured JSON logging for request handling. Observability is read-only
//! with respect to the pipeline: logging a request must never change its
//! outcome. Output is synchronous, unbuffered, and deterministic (fields
//! sorted by key).

mod logger;

pub use logger::{Logger, Severity};
