use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The outcome of one executed request. Produced exactly once per call and
/// immutable after creation; the executor never raises, so every call yields
/// one of these with a numeric status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub duration_ms: u64,
    pub timestamp: DateTime<Utc>,
}

impl ApiResponse {
    /// Synthesized response for network errors, timeouts and anything else
    /// that failed before an HTTP status was available.
    pub fn transport_failure(message: String, duration_ms: u64) -> Self {
        ApiResponse {
            status: 500,
            status_text: String::from("Internal Server Error"),
            data: Value::Null,
            error: Some(message),
            duration_ms,
            timestamp: Utc::now(),
        }
    }
}
