//! Liveness probe tests.

mod common;

use common::TestApp;
use remedy_service::services::providers::mock::MockCompletionProvider;
use reqwest::StatusCode;
use std::sync::Arc;

#[tokio::test]
async fn health_check_returns_ok_without_auth() {
    let app = TestApp::spawn(Arc::new(MockCompletionProvider::empty())).await;

    let response = app
        .client
        .get(app.url("/health"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "remedy-service");
}
