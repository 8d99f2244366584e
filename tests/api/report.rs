use probie::domain::report::ReportStatus;
use probie::store::keys;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::spawn_test_app;

#[tokio::test]
async fn report_aggregates_all_diagnostic_sections() {
    let mut app = spawn_test_app().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cache/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "healthy", "cache": {"enabled": true}})),
        )
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cache/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "isRunning": true,
            "lastRun": "2025-05-13T18:30:03.681Z",
            "nextScheduledRun": "2025-05-13T20:30:00.000Z",
            "results": {"routes": {"count": 5, "status": "success"}}
        })))
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cache/redis/keys"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"keys": ["stage:routes", "stage:appusers"]})),
        )
        .mount(&app.server)
        .await;

    let report = app.console.generate_report().await.unwrap();

    assert_eq!(report.environment, "Test");
    assert_eq!(report.health_apis.len(), 2);
    let paths: Vec<&str> = report
        .health_apis
        .iter()
        .map(|r| r.endpoint.as_str())
        .collect();
    assert_eq!(paths, vec!["/health", "/api/cache/health"]);
    for result in &report.health_apis {
        assert_eq!(result.status, ReportStatus::Code(200));
        assert!(result.data.is_some());
        assert!(result.error.is_none());
    }
    assert_eq!(report.cache_status.cache, "Healthy");
    let scheduler = report.cache_status.scheduler.as_ref().unwrap();
    assert_eq!(scheduler.is_running, json!(true));
    assert_eq!(report.redis_keys, vec!["stage:routes", "stage:appusers"]);
    assert!(app.store().contains(keys::HEALTH_REPORT));
}

#[tokio::test]
async fn report_is_fully_annotated_when_every_sub_call_fails() {
    let mut app = spawn_test_app().await;
    app.console.select_environment("Unreachable").unwrap();

    let report = app.console.generate_report().await.unwrap();

    assert_eq!(report.environment, "Unreachable");
    assert_eq!(report.health_apis.len(), 2);
    for result in &report.health_apis {
        assert_eq!(result.status, ReportStatus::error());
        assert!(result.data.is_none());
        assert!(!result.error.as_ref().unwrap().is_empty());
    }
    assert_eq!(report.cache_status.cache, "Error fetching cache status");
    assert!(report.cache_status.scheduler.is_none());
    assert_eq!(report.redis_keys, vec!["Error fetching Redis keys"]);
}

#[tokio::test]
async fn unhealthy_services_keep_their_status_and_body() {
    let mut app = spawn_test_app().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(json!({"status": "unhealthy", "error": "Redis down"})),
        )
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cache/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cache/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"isRunning": false})))
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cache/redis/keys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"keys": []})))
        .mount(&app.server)
        .await;

    let report = app.console.generate_report().await.unwrap();

    // A non-2xx answer is still an answer: the row keeps the numeric status
    // and the diagnostic body, and the remaining checks still run.
    assert_eq!(report.health_apis.len(), 2);
    assert_eq!(report.health_apis[0].status, ReportStatus::Code(503));
    assert_eq!(
        report.health_apis[0].data,
        Some(json!({"status": "unhealthy", "error": "Redis down"}))
    );
    assert!(report.health_apis[0].error.is_none());
    assert_eq!(report.health_apis[1].status, ReportStatus::Code(200));
    // No "status" field in the cache-status body maps to Unhealthy.
    assert_eq!(report.cache_status.cache, "Unhealthy");
    assert!(report.redis_keys.is_empty());
}

#[tokio::test]
async fn last_report_survives_a_reopen_and_clearing_removes_it() {
    let mut app = spawn_test_app().await;
    app.console.select_environment("Unreachable").unwrap();
    app.console.generate_report().await.unwrap();

    let reopened = app.reopen();
    assert!(reopened.last_report().is_some());

    app.console.clear_report().unwrap();
    assert!(app.console.last_report().is_none());
    assert!(!app.store().contains(keys::HEALTH_REPORT));
    assert!(app.reopen().last_report().is_none());
}
