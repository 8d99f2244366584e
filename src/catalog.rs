//! Static endpoint catalog. Hard-coded, read-only; grouped by `group` for
//! display. The JSON examples are illustrative only.

use crate::domain::endpoint::{EndpointDescriptor, HttpMethod};
use crate::domain::environment::Environment;

fn descriptor(
    id: &str,
    name: &str,
    method: HttpMethod,
    path: &str,
    description: &str,
    group: &str,
    success_example: &str,
    error_example: &str,
) -> EndpointDescriptor {
    EndpointDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        method,
        path: path.to_string(),
        description: description.to_string(),
        group: group.to_string(),
        success_example: Some(success_example.to_string()),
        error_example: Some(error_example.to_string()),
    }
}

/// The fixed list of known routes, in display order.
pub fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        descriptor(
            "collection-status",
            "Collection Status",
            HttpMethod::GET,
            "/api/cache/status",
            "Displays status and document count of all collections in the cache.",
            "Collection Status",
            r#"{
  "results": {
    "appusers": { "count": 51, "status": "success" },
    "dropdown": { "count": 31, "status": "success" },
    "accessRoles": { "count": 7, "status": "success" },
    "routes": { "count": 5, "status": "success" }
  },
  "timestamp": "2025-05-13T20:40:00.000Z"
}"#,
            r#"{
  "error": "Failed to fetch collection statuses",
  "environment": "stage"
}"#,
        ),
        descriptor(
            "health-check",
            "Health Check",
            HttpMethod::GET,
            "/health",
            "Returns overall service and backing-store health status.",
            "Health",
            r#"{
  "status": "healthy",
  "timestamp": "2025-05-13T18:34:38.599Z",
  "environment": "stage",
  "services": {
    "database": { "status": "healthy", "message": "Database connection successful" },
    "redis": { "status": "healthy", "message": "Redis connection successful" },
    "storage": { "status": "healthy", "message": "Storage connection successful" },
    "auth": { "status": "healthy", "message": "Auth connection successful" }
  },
  "version": "unknown"
}"#,
            r#"{
  "status": "unhealthy",
  "error": "Internal Server Error",
  "timestamp": "2025-05-13T18:34:38.599Z"
}"#,
        ),
        descriptor(
            "cache-health",
            "Cache Health",
            HttpMethod::GET,
            "/api/cache/health",
            "Returns Redis scheduler and cache status.",
            "Cache Management",
            r#"{
  "status": "healthy",
  "timestamp": "2024-03-21T10:30:00.000Z",
  "environment": "stage",
  "cache": {
    "enabled": true,
    "scheduler": {
      "isRunning": true,
      "lastRun": "2024-03-21T10:00:00.000Z",
      "nextScheduledRun": "2024-03-21T11:00:00.000Z"
    }
  }
}"#,
            r#"{
  "status": "unhealthy",
  "error": "Redis connection failed"
}"#,
        ),
        descriptor(
            "cache-status",
            "Cache Status",
            HttpMethod::GET,
            "/api/cache/status",
            "Shows if the cache scheduler is running.",
            "Cache Management",
            r#"{
  "isRunning": true,
  "lastRun": "2025-05-13T18:30:03.681Z",
  "nextScheduledRun": "2025-05-13T20:30:00.000Z"
}"#,
            r#"{
  "error": "Scheduler fetch failed",
  "environment": "stage"
}"#,
        ),
        descriptor(
            "warm-cache",
            "Warm Cache",
            HttpMethod::POST,
            "/api/cache/warm",
            "Manually warms up the cache.",
            "Cache Management",
            r#"{
  "isRunning": true,
  "lastRun": "2025-05-13T18:30:03.681Z",
  "nextScheduledRun": "2025-05-13T20:30:00.000Z",
  "results": {
    "success": true,
    "collections": {
      "appusers": { "count": 51, "status": "success" },
      "routes": { "count": 5, "status": "success" }
    }
  }
}"#,
            r#"{
  "error": "Cache warm failed",
  "environment": "stage",
  "force": true
}"#,
        ),
        descriptor(
            "redis-keys",
            "Redis Keys",
            HttpMethod::GET,
            "/api/cache/redis/keys",
            "Lists all Redis keys for the environment.",
            "Redis Management",
            r#"{
  "keys": [
    "stage:routes",
    "stage:dropdown",
    "stage:appusers",
    "stage:dropdown:accessRoles"
  ],
  "environment": "stage"
}"#,
            r#"{
  "error": "Redis key fetch failed",
  "environment": "stage",
  "force": false
}"#,
        ),
        descriptor(
            "flush-redis",
            "Flush Redis",
            HttpMethod::POST,
            "/api/cache/redis/flush",
            "Clears all Redis keys for the environment.",
            "Redis Management",
            r#"{
  "success": true,
  "environment": "stage"
}"#,
            r#"{
  "error": "Flush failed",
  "environment": "stage",
  "force": true
}"#,
        ),
        descriptor(
            "start-scheduler",
            "Start Scheduler",
            HttpMethod::POST,
            "/api/cache/start",
            "Starts the Redis cache scheduler.",
            "Scheduler Management",
            r#"{
  "isRunning": true,
  "environment": "stage"
}"#,
            r#"{
  "error": "Scheduler start failed",
  "environment": "stage",
  "force": true
}"#,
        ),
        descriptor(
            "stop-scheduler",
            "Stop Scheduler",
            HttpMethod::POST,
            "/api/cache/stop",
            "Stops the Redis cache scheduler.",
            "Scheduler Management",
            r#"{
  "isRunning": false,
  "environment": "stage"
}"#,
            r#"{
  "error": "Scheduler stop failed",
  "environment": "stage",
  "force": true
}"#,
        ),
    ]
}

/// Distinct group names in first-appearance order.
pub fn endpoint_groups(catalog: &[EndpointDescriptor]) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();
    for endpoint in catalog {
        if !groups.contains(&endpoint.group) {
            groups.push(endpoint.group.clone());
        }
    }
    groups
}

pub fn endpoints_in_group<'a>(
    catalog: &'a [EndpointDescriptor],
    group: &str,
) -> Vec<&'a EndpointDescriptor> {
    catalog.iter().filter(|e| e.group == group).collect()
}

/// The fixed environment list. Selection defaults to the first entry.
pub fn default_environments() -> Vec<Environment> {
    vec![
        Environment::new("Stage", "https://staging.example.com"),
        Environment::new("Production", "https://api.example.com"),
    ]
}
