use std::time::Duration;

use thiserror::Error;

/// One entry in a test outcome's failure list.
///
/// Every variant except the `Debug*` dumps is a genuine mismatch or error.
/// The dumps are only attached in debug mode, after at least one genuine
/// failure was recorded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TestFailure {
    #[error("HTTP method '{method}' is not supported.")]
    UnsupportedMethod { method: String },
    #[error("Failed to build request: {reason}")]
    RequestConstruction { reason: String },
    #[error("Request failed: {reason}")]
    Transport { reason: String },
    #[error("Failed to read response body ({reason}). Skipping response body checks.")]
    BodyRead { reason: String },
    #[error("Status code mismatch: expected {expected}, but received {actual}.")]
    StatusMismatch { expected: u16, actual: u16 },
    #[error("Response body mismatch: expected '{path}' to be '{expected}', but got '{actual}'.")]
    BodyValueMismatch {
        path: String,
        expected: String,
        actual: String,
    },
    #[error("Latency exceeded: expected below {max:?}, but it took {actual:?}.")]
    LatencyExceeded { max: Duration, actual: Duration },
    #[error("Body for debugging: {0}")]
    DebugBody(String),
    #[error("Request for debugging: {0}")]
    DebugRequest(String),
    #[error("Response for debugging: {0}")]
    DebugResponse(String),
}

impl TestFailure {
    #[must_use]
    pub const fn is_diagnostic(&self) -> bool {
        matches!(
            self,
            Self::DebugBody(_) | Self::DebugRequest(_) | Self::DebugResponse(_)
        )
    }
}
