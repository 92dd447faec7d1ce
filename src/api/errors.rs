//! API error types
//!
//! Envelope-level errors carry their own codes; service errors map onto the
//! validation/internal pair and keep their message text unchanged.

use std::fmt;

use crate::service::ServiceError;

/// API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Request is not a well-formed envelope
    InvalidRequest,
    /// Operation name not recognized
    UnknownOperation,
    /// Utterance rejected by the validity rules
    ValidationFailed,
    /// Unexpected subsystem failure
    Internal,
}

impl ApiErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorCode::InvalidRequest => "NLQ_INVALID_REQUEST",
            ApiErrorCode::UnknownOperation => "NLQ_UNKNOWN_OPERATION",
            ApiErrorCode::ValidationFailed => "NLQ_VALIDATION_FAILED",
            ApiErrorCode::Internal => "NLQ_INTERNAL",
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// API error
#[derive(Debug, Clone)]
pub struct ApiError {
    code: ApiErrorCode,
    message: String,
}

impl ApiError {
    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::InvalidRequest,
            message: reason.into(),
        }
    }

    /// Create an unknown operation error
    pub fn unknown_operation(op: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::UnknownOperation,
            message: format!("Unknown operation: {}", op.into()),
        }
    }

    /// Create an internal error
    pub fn internal(reason: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::Internal,
            message: reason.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ApiErrorCode {
        self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        let code = if e.is_validation() {
            ApiErrorCode::ValidationFailed
        } else {
            ApiErrorCode::Internal
        };
        Self {
            code,
            message: e.to_string(),
        }
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;
