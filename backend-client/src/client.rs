// Export backend HTTP client

use crate::errors::ClientError;
use serde_json::value::RawValue;
use std::time::Duration;

/// Path of the export operation on the backend
const FETCH_AND_SEND_PATH: &str = "fetch_and_send";

/// Client for the external export backend
#[derive(Debug, Clone)]
pub struct ExportBackendClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ExportBackendClient {
    /// Create a new backend client
    ///
    /// # Arguments
    /// * `base_url` - Backend base URL (e.g., "https://exports.example.com")
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, None)
    }

    /// Create a new backend client with an overall request timeout
    ///
    /// Without a timeout the transport defaults apply.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let endpoint = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            FETCH_AND_SEND_PATH
        );

        Ok(Self { client, endpoint })
    }

    /// Full URL requests are forwarded to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `payload` to the backend unchanged and return its JSON answer
    ///
    /// Both bodies stay raw JSON text, so key order and number spelling
    /// survive the round trip.
    ///
    /// # Returns
    /// The backend's JSON body on a success status, `ClientError::Upstream`
    /// with the raw body text otherwise.
    pub async fn forward(&self, payload: &RawValue) -> Result<Box<RawValue>, ClientError> {
        let response = self.client.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ClientError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let result: Box<RawValue> =
            serde_json::from_slice(&bytes).map_err(ClientError::InvalidResponse)?;
        tracing::debug!("Backend answered {} ({} bytes)", status, bytes.len());

        Ok(result)
    }
}
