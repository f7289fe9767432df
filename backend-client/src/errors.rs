// Client errors

/// Client errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("backend returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("invalid response body: {0}")]
    InvalidResponse(#[source] serde_json::Error),
}
