use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::endpoint::EndpointDescriptor;
use crate::domain::environment::Environment;
use crate::domain::response::ApiResponse;

/// One completed request, success or error path alike. The endpoint and
/// environment are snapshotted so the entry stays meaningful if the catalog
/// changes between releases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub endpoint: EndpointDescriptor,
    pub environment: Environment,
    pub response: ApiResponse,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        endpoint: EndpointDescriptor,
        environment: Environment,
        response: ApiResponse,
    ) -> Self {
        HistoryEntry {
            id: Uuid::new_v4(),
            endpoint,
            environment,
            response,
            timestamp: Utc::now(),
        }
    }
}
