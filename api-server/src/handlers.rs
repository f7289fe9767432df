// API handlers

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Json, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use looker_export_core::ExportResult;
use serde_json::{json, value::RawValue};

use crate::app::SharedState;
use crate::errors::RelayError;

/// GET /api/health - Health check endpoint
pub async fn health() -> Response {
    let health_status = json!({
        "status": "healthy",
        "service": "looker-export-api",
        "version": env!("CARGO_PKG_VERSION"),
    });

    (StatusCode::OK, Json(health_status)).into_response()
}

/// POST /api/fetch_and_send - Relay an export request to the backend
///
/// The body is forwarded as-is. The backend's JSON comes back unchanged on
/// success; every failure is answered with a JSON `error` message, 500
/// unless the body itself was refused.
pub async fn fetch_and_send(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let result = match body {
        Ok(body) => relay(&state, &body).await,
        Err(rejection) => Err(RelayError::Body(rejection)),
    };

    match result {
        Ok(result) => {
            match records_exported(&result) {
                Some(count) => tracing::info!("Export relayed: {} records", count),
                None => tracing::info!("Export relayed"),
            }
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(e) => {
            match &e {
                RelayError::Upstream { status, body } => {
                    tracing::error!(upstream_status = *status, "Backend error response: {}", body);
                }
                other => tracing::error!("Relay failed: {}", other),
            }
            e.into_response()
        }
    }
}

async fn relay(state: &SharedState, body: &[u8]) -> Result<Box<RawValue>, RelayError> {
    let payload: Box<RawValue> =
        serde_json::from_slice(body).map_err(RelayError::MalformedRequest)?;
    let result = state.backend.forward(&payload).await?;
    Ok(result)
}

/// Record count for the log line; the relayed text is left untouched
fn records_exported(result: &RawValue) -> Option<u64> {
    serde_json::from_str::<ExportResult>(result.get())
        .ok()
        .and_then(|r| r.records_exported)
}

/// Any path that no route matches
pub async fn not_found(uri: Uri) -> Response {
    tracing::debug!("No route for {}", uri);
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("Not found: {}", uri.path()) })),
    )
        .into_response()
}
