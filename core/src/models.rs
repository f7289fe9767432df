// Core data models for Looker Export

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// End date that stands for an open-ended range
pub const SENTINEL_END_DATE: &str = "9999-12-31";

/// Prefix put in front of the raw upstream text when the backend rejects a request
pub const BACKEND_ERROR_PREFIX: &str = "Backend error: ";

/// Relay could not reach the backend or read its answer
pub const BACKEND_UNREACHABLE_MESSAGE: &str = "Failed to connect to backend server";

/// Browser could not reach the relay or read its answer
pub const CONNECTION_FAILURE_MESSAGE: &str = "Failed to connect to server";

/// Reporting view offered for export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExploreView {
    #[default]
    FactFenixUserConsult,
    FactConsult,
    FactClinicianCalendarQtrHr,
}

impl ExploreView {
    /// All selectable views, in display order
    pub const ALL: [ExploreView; 3] = [
        ExploreView::FactFenixUserConsult,
        ExploreView::FactConsult,
        ExploreView::FactClinicianCalendarQtrHr,
    ];

    /// Identifier sent as `explore`
    pub fn value(&self) -> &'static str {
        match self {
            ExploreView::FactFenixUserConsult => "fact_fenix_user_consult",
            ExploreView::FactConsult => "fact_consult",
            ExploreView::FactClinicianCalendarQtrHr => "fact_clinician_calendar_qtr_hr",
        }
    }

    /// Human-readable label for the selector
    pub fn label(&self) -> &'static str {
        match self {
            ExploreView::FactFenixUserConsult => "Fenix User Consult",
            ExploreView::FactConsult => "Consult",
            ExploreView::FactClinicianCalendarQtrHr => "Clinician Calendar Quarter Hour",
        }
    }
}

impl fmt::Display for ExploreView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Unknown view identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view: {0}")]
pub struct UnknownViewError(pub String);

impl FromStr for ExploreView {
    type Err = UnknownViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExploreView::ALL
            .into_iter()
            .find(|view| view.value() == s)
            .ok_or_else(|| UnknownViewError(s.to_string()))
    }
}

/// API Request: POST /api/fetch_and_send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    /// Selected view
    pub explore: ExploreView,

    /// Record limit, ignored by the backend when `no_limit` is set
    pub limit: u32,

    pub no_limit: bool,

    /// `YYYY-MM-DD`
    pub start_date: String,

    /// `YYYY-MM-DD`, or the sentinel for "no end date"
    pub end_date: String,
}

impl ExportRequest {
    /// Whether the request asks for an open-ended range
    pub fn is_open_ended(&self) -> bool {
        self.end_date == SENTINEL_END_DATE
    }
}

/// API Response: POST /api/fetch_and_send
///
/// Every field is optional; the backend decides which ones it sends.
/// A present `error` makes the whole result a failure.
///
/// Fields are read leniently: a value of the wrong kind counts as absent
/// instead of failing the whole result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportResult {
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub records_exported: Option<u64>,

    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub filename: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub sheet_url: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
}

/// Any scalar as text; null, arrays and objects as absent
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Non-negative whole number, or a string holding one
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= u64::MAX as f64)
                .map(|n| n as u64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}

/// Borrowed view of an [`ExportResult`] for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome<'a> {
    Failure {
        error: &'a str,
    },
    Success {
        message: Option<&'a str>,
        records_exported: Option<u64>,
        filename: Option<&'a str>,
        sheet_url: Option<&'a str>,
    },
}

impl ExportResult {
    /// Read a relay answer
    ///
    /// Any JSON is accepted; a body that is not an object reads as an empty
    /// success. Only text that is not JSON at all is an error.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(bytes)?;
        if value.is_object() {
            serde_json::from_value(value)
        } else {
            Ok(Self::default())
        }
    }

    /// Result shown when the relay cannot be reached
    pub fn connection_failure() -> Self {
        Self::error(CONNECTION_FAILURE_MESSAGE)
    }

    /// Failure result with the given message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn outcome(&self) -> ExportOutcome<'_> {
        match &self.error {
            Some(error) => ExportOutcome::Failure { error },
            None => ExportOutcome::Success {
                message: self.message.as_deref(),
                records_exported: self.records_exported,
                filename: self.filename.as_deref(),
                sheet_url: self.sheet_url.as_deref(),
            },
        }
    }
}

/// Error payload produced by the relay itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Backend answered with a non-success status
    pub fn backend_error(upstream_text: &str) -> Self {
        Self {
            error: format!("{}{}", BACKEND_ERROR_PREFIX, upstream_text),
        }
    }

    /// Backend unreachable, or request/response body malformed
    pub fn backend_unreachable() -> Self {
        Self {
            error: BACKEND_UNREACHABLE_MESSAGE.to_string(),
        }
    }
}
