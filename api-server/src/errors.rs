// Relay errors

use axum::{
    extract::{rejection::BytesRejection, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use looker_export_backend_client::ClientError;
use looker_export_core::ErrorResponse;

/// Ways a relay request can fail
///
/// Every variant but `Body` is answered with 500; only `Upstream` carries
/// text back to the caller, embedded in the error message.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Body could not be read, e.g. over the configured size limit
    #[error("request body rejected: {0}")]
    Body(#[source] BytesRejection),

    #[error("request body is not JSON: {0}")]
    MalformedRequest(#[source] serde_json::Error),

    #[error("backend returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("backend unreachable: {0}")]
    Connection(#[source] ClientError),
}

impl From<ClientError> for RelayError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Upstream { status, body } => RelayError::Upstream { status, body },
            other => RelayError::Connection(other),
        }
    }
}

impl RelayError {
    /// Payload sent back to the browser
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            RelayError::Body(rejection) => ErrorResponse {
                error: rejection.body_text(),
            },
            RelayError::Upstream { body, .. } => ErrorResponse::backend_error(body),
            RelayError::MalformedRequest(_) | RelayError::Connection(_) => {
                ErrorResponse::backend_unreachable()
            }
        }
    }

    /// Rejection status for an unreadable body (413 when too large), 500 otherwise
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Body(rejection) => rejection.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_error_response())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_text_is_embedded_in_message() {
        // Expected: "Backend error: <upstream text>"
        let error = RelayError::from(ClientError::Upstream {
            status: 404,
            body: "no such explore".to_string(),
        });
        assert_eq!(
            error.to_error_response().error,
            "Backend error: no such explore"
        );
    }

    #[test]
    fn test_malformed_request_uses_generic_message() {
        // Request parse errors are not echoed back
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = RelayError::MalformedRequest(parse_error);
        assert_eq!(
            error.to_error_response().error,
            "Failed to connect to backend server"
        );
    }

    #[test]
    fn test_into_response_is_500() {
        // Upstream status is not passed through
        let response = RelayError::Upstream {
            status: 503,
            body: "maintenance".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
