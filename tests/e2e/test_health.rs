use crate::helpers::health_service;
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn health_reports_service_status() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(200).json_body(json!({"status": "UP"}));
    });

    let status = health_service(&server)
        .get_health()
        .await
        .expect("health should succeed");

    mock.assert();
    assert_eq!(status.status, "UP");
}

#[tokio::test]
async fn unavailable_service_fails_with_normalized_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(503)
            .json_body(json!({"message": "Service unavailable"}));
    });

    let err = health_service(&server)
        .get_health()
        .await
        .expect_err("503 should fail");

    assert_eq!(err.message, "Service unavailable");
}
