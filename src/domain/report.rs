use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status column of a report row: the HTTP status code when the call went
/// through, the literal string "Error" when it did not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportStatus {
    Code(u16),
    Text(String),
}

impl ReportStatus {
    pub fn error() -> Self {
        ReportStatus::Text(String::from("Error"))
    }
}

/// One health endpoint's contribution to the report. Exactly one of `data`
/// and `error` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthApiResult {
    pub endpoint: String,
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerStatus {
    pub is_running: Value,
    pub last_run: Value,
    pub next_scheduled_run: Value,
}

/// Shallow view of the cache-status endpoint. Fields the backend did not
/// send are omitted rather than written as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatusSummary {
    pub cache: String,
    pub scheduler: Option<SchedulerStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_results: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

impl CacheStatusSummary {
    /// Sentinel written when the cache-status call itself failed.
    pub fn unavailable() -> Self {
        CacheStatusSummary {
            cache: String::from("Error fetching cache status"),
            scheduler: None,
            results: None,
            verification_results: None,
            logs: None,
            errors: None,
        }
    }
}

/// Composite snapshot of the diagnostic endpoints. Rebuilt wholesale on each
/// generation; failing sections carry explicit error markers, never absent
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub timestamp: DateTime<Utc>,
    pub environment: String,
    pub health_apis: Vec<HealthApiResult>,
    pub cache_status: CacheStatusSummary,
    pub redis_keys: Vec<String>,
}
