use looker_export_api_client::{fetch_and_send, get_api_base_url, submit_export, ApiError};
use looker_export_core::{ExploreView, ExportRequest, ExportResult};
use serde_json::json;
use serial_test::serial;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ========================================
// Test helpers
// ========================================

/// Keep requests to the local mock server away from any configured proxy
fn disable_proxy_for_test() {
    std::env::remove_var("HTTP_PROXY");
    std::env::remove_var("HTTPS_PROXY");
    std::env::remove_var("http_proxy");
    std::env::remove_var("https_proxy");
    std::env::set_var("NO_PROXY", "localhost,127.0.0.1");
}

fn sample_request() -> ExportRequest {
    ExportRequest {
        explore: ExploreView::FactClinicianCalendarQtrHr,
        limit: 200,
        no_limit: true,
        start_date: "2024-06-08".to_string(),
        end_date: "9999-12-31".to_string(),
    }
}

// ========================================
// Base URL
// ========================================

#[test]
#[serial]
fn test_api_base_url_from_env() {
    std::env::set_var("API_BASE_URL", "http://relay.example.com");
    assert_eq!(get_api_base_url(), "http://relay.example.com");

    std::env::remove_var("API_BASE_URL");
    assert_eq!(get_api_base_url(), "http://localhost:8080");
}

// ========================================
// fetch_and_send
// ========================================

#[tokio::test]
#[serial]
async fn test_fetch_and_send_success() {
    // Expected: every success field comes through
    disable_proxy_for_test();

    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/api/fetch_and_send")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "message": "Export complete",
                "records_exported": 42,
                "filename": "calendar.csv"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let result = fetch_and_send(&server.url(), &sample_request()).await;

    assert!(result.is_ok(), "Expected Ok but got: {:?}", result);
    let result = result.unwrap();
    assert!(!result.is_error());
    assert_eq!(result.message.as_deref(), Some("Export complete"));
    assert_eq!(result.records_exported, Some(42));
    assert_eq!(result.filename.as_deref(), Some("calendar.csv"));

    mock.assert_async().await;
}

#[tokio::test]
#[serial]
async fn test_fetch_and_send_posts_request_json() {
    // The request goes out in its camelCase wire shape
    disable_proxy_for_test();

    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/fetch_and_send"))
        .and(body_json(json!({
            "explore": "fact_clinician_calendar_qtr_hr",
            "limit": 200,
            "noLimit": true,
            "startDate": "2024-06-08",
            "endDate": "9999-12-31"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = fetch_and_send(&mock_server.uri(), &sample_request()).await;

    assert_eq!(
        result,
        Ok(ExportResult {
            message: Some("ok".to_string()),
            ..ExportResult::default()
        })
    );
}

#[tokio::test]
#[serial]
async fn test_fetch_and_send_error_payload_on_500() {
    // The status is ignored; the relay's error text is shown as-is
    disable_proxy_for_test();

    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/fetch_and_send"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "error": "Backend error: bad request" })),
        )
        .mount(&mock_server)
        .await;

    let result = fetch_and_send(&mock_server.uri(), &sample_request())
        .await
        .unwrap();

    assert!(result.is_error());
    assert_eq!(result.error.as_deref(), Some("Backend error: bad request"));
}

#[tokio::test]
#[serial]
async fn test_fetch_and_send_network_error() {
    disable_proxy_for_test();

    // Nothing listens on the discard port
    let result = fetch_and_send("http://127.0.0.1:9", &sample_request()).await;

    assert!(matches!(result, Err(ApiError::NetworkError(_))));
}

#[tokio::test]
#[serial]
async fn test_fetch_and_send_invalid_json_response() {
    // Expected: InvalidResponse for a non-JSON body
    disable_proxy_for_test();

    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/fetch_and_send"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let result = fetch_and_send(&mock_server.uri(), &sample_request()).await;

    assert!(matches!(result, Err(ApiError::InvalidResponse(_))));
}

#[tokio::test]
#[serial]
async fn test_fetch_and_send_reads_wrongly_typed_fields() {
    // A count sent as text still renders instead of reading as a failure
    disable_proxy_for_test();

    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/fetch_and_send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Export complete",
            "records_exported": "42",
            "sheet_url": null
        })))
        .mount(&mock_server)
        .await;

    let result = fetch_and_send(&mock_server.uri(), &sample_request())
        .await
        .unwrap();

    assert!(!result.is_error());
    assert_eq!(result.message.as_deref(), Some("Export complete"));
    assert_eq!(result.records_exported, Some(42));
    assert_eq!(result.sheet_url, None);
}

#[tokio::test]
#[serial]
async fn test_fetch_and_send_non_object_json_is_empty_success() {
    disable_proxy_for_test();

    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/fetch_and_send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["queued"])))
        .mount(&mock_server)
        .await;

    let result = fetch_and_send(&mock_server.uri(), &sample_request()).await;

    assert_eq!(result, Ok(ExportResult::default()));
}

// ========================================
// submit_export
// ========================================

#[tokio::test]
#[serial]
async fn test_submit_export_folds_failures_into_generic_message() {
    disable_proxy_for_test();

    let result = submit_export("http://127.0.0.1:9", &sample_request()).await;

    assert_eq!(result, ExportResult::connection_failure());
}
