//! Request executor: one HTTP call with timing and error capture. The
//! `try_` variants distinguish transport failures (no HTTP response at all)
//! from received responses; [`execute`] folds everything into the returned
//! [`ApiResponse`] so nothing escapes this boundary.

use std::time::{Duration, Instant};

use log::{debug, warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use url::Url;

use crate::domain::endpoint::{convert_http_method, EndpointDescriptor, HttpMethod};
use crate::domain::environment::Environment;
use crate::domain::response::ApiResponse;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// No HTTP response was received: network error, timeout, or a URL that
/// never produced a request.
#[derive(Debug)]
pub struct TransportFailure {
    pub message: String,
    pub duration_ms: u64,
}

impl TransportFailure {
    pub fn into_response(self) -> ApiResponse {
        ApiResponse::transport_failure(self.message, self.duration_ms)
    }
}

/// Execute one catalog endpoint against the given environment. Failures of
/// every kind resolve to a response value.
pub async fn execute(
    client: &Client,
    endpoint: &EndpointDescriptor,
    environment: &Environment,
) -> ApiResponse {
    try_execute(client, endpoint, environment)
        .await
        .unwrap_or_else(TransportFailure::into_response)
}

/// Like [`execute`], but `Err` when no HTTP response was received. A non-2xx
/// response is still `Ok`, with `error` populated and the body preserved.
pub async fn try_execute(
    client: &Client,
    endpoint: &EndpointDescriptor,
    environment: &Environment,
) -> Result<ApiResponse, TransportFailure> {
    try_execute_path(
        client,
        endpoint.method,
        environment,
        &endpoint.path,
        REQUEST_TIMEOUT,
    )
    .await
}

/// Execute an arbitrary path against the given environment. The URL is the
/// environment's base URL with the path appended verbatim. No retries, no
/// credentials.
pub async fn try_execute_path(
    client: &Client,
    method: HttpMethod,
    environment: &Environment,
    path: &str,
    timeout: Duration,
) -> Result<ApiResponse, TransportFailure> {
    let started = Instant::now();
    let raw_url = format!("{}{}", environment.base_url, path);
    let url = match Url::parse(&raw_url) {
        Ok(url) => url,
        Err(e) => {
            warn!("invalid request url {raw_url}: {e}");
            return Err(failure(e.to_string(), started));
        }
    };

    debug!("sending {method} {url}");
    let result = client
        .request(convert_http_method(method), url)
        .timeout(timeout)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await;

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            warn!("{method} {raw_url} failed: {e}");
            return Err(failure(e.to_string(), started));
        }
    };

    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!("{method} {raw_url} body read failed: {e}");
            return Err(failure(e.to_string(), started));
        }
    };

    let error = if status.is_success() {
        None
    } else {
        Some(format!(
            "request failed with status code {}",
            status.as_u16()
        ))
    };

    Ok(ApiResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        data: parse_body(body),
        error,
        duration_ms: elapsed_ms(started),
        timestamp: chrono::Utc::now(),
    })
}

fn failure(message: String, started: Instant) -> TransportFailure {
    TransportFailure {
        message,
        duration_ms: elapsed_ms(started),
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

// Bodies are assumed to be JSON; anything else is carried as a string so the
// call still resolves to a response value.
fn parse_body(body: String) -> serde_json::Value {
    if body.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body))
}
