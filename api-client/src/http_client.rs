// HTTP client for the relay endpoint

use crate::errors::ApiError;
use looker_export_core::{ExportRequest, ExportResult};
use std::env;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Relay base URL for native callers
///
/// In the browser there is no environment, so this is the default unless the
/// caller passes the page origin instead.
pub fn get_api_base_url() -> String {
    env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}

/// Send an export request to the relay
///
/// # Arguments
/// * `base_url` - Relay origin, e.g. "http://localhost:8080"
/// * `request` - Export request built from the form
///
/// # Returns
/// The relay's payload, whatever the HTTP status: a failed export still
/// arrives as an `ExportResult` carrying `error`. Any JSON body is accepted;
/// only a body that is not JSON is `ApiError::InvalidResponse`.
pub async fn fetch_and_send(
    base_url: &str,
    request: &ExportRequest,
) -> Result<ExportResult, ApiError> {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/fetch_and_send", base_url.trim_end_matches('/')))
        .json(request)
        .send()
        .await
        .map_err(|e| ApiError::NetworkError(e.to_string()))?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::NetworkError(e.to_string()))?;

    ExportResult::from_json_slice(&bytes).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

/// Send an export request and fold every failure into a displayable result
pub async fn submit_export(base_url: &str, request: &ExportRequest) -> ExportResult {
    match fetch_and_send(base_url, request).await {
        Ok(result) => result,
        Err(e) => e.to_export_result(),
    }
}
