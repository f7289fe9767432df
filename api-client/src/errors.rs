// API client errors

use looker_export_core::ExportResult;

/// API client error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Relay could not be reached
    NetworkError(String),
    /// Relay answered with something that is not an export result
    InvalidResponse(String),
}

impl ApiError {
    /// Result the form shows for this error
    ///
    /// The detail stays out of the UI; every error reads as a connection failure.
    pub fn to_export_result(&self) -> ExportResult {
        ExportResult::connection_failure()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NetworkError(msg) => write!(f, "network error: {}", msg),
            ApiError::InvalidResponse(msg) => write!(f, "invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
