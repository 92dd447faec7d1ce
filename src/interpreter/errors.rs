//! Interpreter error types

use thiserror::Error;

/// Result type for interpreter operations
pub type ExecuteResult<T> = Result<T, ExecuteError>;

/// Execution errors.
///
/// The in-process store cannot actually become unreachable; the variant
/// exists so callers handle the failure mode a remote store would have.
/// Unrecognized query text is not an error: it degrades to an empty result.
#[derive(Debug, Clone, Error)]
pub enum ExecuteError {
    /// Table store unreachable
    #[error("table store unavailable: {0}")]
    StoreUnavailable(String),
}
