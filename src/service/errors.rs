//! Service error types
//!
//! Two caller-facing classes: validation failures (the caller sent an
//! unsupported utterance) and internal failures (a subsystem broke). The
//! classifier and renderer are total, so only the orchestration layer
//! raises validation errors.

use thiserror::Error;

use crate::interpreter::ExecuteError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Caller-facing service errors
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// Malformed or unsupported utterance (4xx-equivalent)
    #[error("validation error: {0}")]
    Validation(String),

    /// Unexpected failure in the store or interpreter (5xx-equivalent).
    /// Should never occur given the closed enumerations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// True for errors the caller can fix by changing the utterance.
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_))
    }
}

impl From<ExecuteError> for ServiceError {
    fn from(e: ExecuteError) -> Self {
        ServiceError::Internal(e.to_string())
    }
}
