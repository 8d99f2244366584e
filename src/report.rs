//! Health-report aggregator: a sequential fan-out over the catalog's health
//! endpoints plus the cache-status and Redis-keys diagnostics, merged into
//! one snapshot. Failures are isolated per section and annotated in place;
//! no partial report is ever discarded.

use chrono::Utc;
use log::{error, info};
use reqwest::Client;
use serde_json::Value;

use crate::domain::endpoint::{EndpointDescriptor, HttpMethod};
use crate::domain::environment::Environment;
use crate::domain::report::{
    CacheStatusSummary, HealthApiResult, HealthReport, ReportStatus, SchedulerStatus,
};
use crate::executor;

const CACHE_STATUS_PATH: &str = "/api/cache/status";
const REDIS_KEYS_PATH: &str = "/api/cache/redis/keys";
const REDIS_KEYS_ERROR: &str = "Error fetching Redis keys";

pub async fn generate(
    client: &Client,
    catalog: &[EndpointDescriptor],
    environment: &Environment,
) -> HealthReport {
    info!("generating health report for {}", environment.name);

    // An "Error" row means the call itself failed; any received response,
    // healthy or not, keeps its status code and body.
    let mut health_apis = Vec::new();
    for endpoint in catalog.iter().filter(|e| e.path.contains("/health")) {
        let result = match executor::try_execute(client, endpoint, environment).await {
            Ok(response) => HealthApiResult {
                endpoint: endpoint.path.clone(),
                status: ReportStatus::Code(response.status),
                data: Some(response.data),
                error: None,
            },
            Err(failure) => {
                error!("health check {} failed: {}", endpoint.path, failure.message);
                HealthApiResult {
                    endpoint: endpoint.path.clone(),
                    status: ReportStatus::error(),
                    data: None,
                    error: Some(failure.message),
                }
            }
        };
        health_apis.push(result);
    }

    HealthReport {
        timestamp: Utc::now(),
        environment: environment.name.clone(),
        health_apis,
        cache_status: fetch_cache_status(client, environment).await,
        redis_keys: fetch_redis_keys(client, environment).await,
    }
}

async fn fetch_cache_status(client: &Client, environment: &Environment) -> CacheStatusSummary {
    let response = match executor::try_execute_path(
        client,
        HttpMethod::GET,
        environment,
        CACHE_STATUS_PATH,
        executor::REQUEST_TIMEOUT,
    )
    .await
    {
        Ok(response) => response,
        Err(failure) => {
            error!("error fetching cache status: {}", failure.message);
            return CacheStatusSummary::unavailable();
        }
    };

    let data = response.data;
    let healthy = data.get("status").and_then(Value::as_str) == Some("healthy");
    CacheStatusSummary {
        cache: String::from(if healthy { "Healthy" } else { "Unhealthy" }),
        scheduler: Some(SchedulerStatus {
            is_running: field(&data, "isRunning"),
            last_run: field(&data, "lastRun"),
            next_scheduled_run: field(&data, "nextScheduledRun"),
        }),
        results: data.get("results").cloned(),
        verification_results: data.get("verificationResults").cloned(),
        logs: data.get("logs").cloned(),
        errors: data.get("errors").cloned(),
    }
}

async fn fetch_redis_keys(client: &Client, environment: &Environment) -> Vec<String> {
    let response = match executor::try_execute_path(
        client,
        HttpMethod::GET,
        environment,
        REDIS_KEYS_PATH,
        executor::REQUEST_TIMEOUT,
    )
    .await
    {
        Ok(response) => response,
        Err(failure) => {
            error!("error fetching redis keys: {}", failure.message);
            return vec![String::from(REDIS_KEYS_ERROR)];
        }
    };

    response
        .data
        .get("keys")
        .and_then(Value::as_array)
        .map(|keys| {
            keys.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn field(data: &Value, name: &str) -> Value {
    data.get(name).cloned().unwrap_or(Value::Null)
}
