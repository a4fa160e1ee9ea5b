//! In-process integration tests for the /predict endpoint
//!
//! These tests run without a live server - they instantiate the router
//! in-process and make HTTP requests directly using axum-test.

use axum_test::TestServer;
use ml_scoring_service::{
    config::AppConfig,
    metrics::ServiceMetrics,
    server::{build_router, AppState},
    types::PredictionResponse,
};
use serde_json::json;
use std::sync::Arc;

fn test_server() -> TestServer {
    let config = AppConfig::default();
    let metrics = Arc::new(ServiceMetrics::new());
    let state = Arc::new(AppState::new(&config, metrics));
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn test_predict_returns_200_with_batch() {
    let server = test_server();

    let response = server
        .post("/predict")
        .json(&json!({
            "features": [[0.3, 1.2, 5.1, 0.0], [0.9, 0.4, 3.3, 1.0]]
        }))
        .await;

    response.assert_status_ok();

    let body: PredictionResponse = response.json();
    assert_eq!(body.predictions.len(), 2);
    assert_eq!(body.scores.len(), 2);
    assert_eq!(body.model_version, "v1.0.0");
}

#[tokio::test]
async fn test_predict_demo_examples() {
    let server = test_server();

    let response = server
        .post("/predict")
        .json(&json!({
            "features": [[0.3, 1.2, 5.1, 0.0], [-5.0, -5.0, 0.0, 0.0]]
        }))
        .await;

    response.assert_status_ok();

    let body: PredictionResponse = response.json();
    // Row sum 6.6 -> 0.9986, label 1; row sum -10 -> 0.0000, label 0
    assert_eq!(body.scores, vec![0.9986, 0.0]);
    assert_eq!(body.predictions, vec![1, 0]);
}

#[tokio::test]
async fn test_predict_zero_sum_row_is_positive() {
    let server = test_server();

    let response = server
        .post("/predict")
        .json(&json!({ "features": [[2.5, -2.5]] }))
        .await;

    response.assert_status_ok();

    let body: PredictionResponse = response.json();
    assert_eq!(body.scores, vec![0.5]);
    assert_eq!(body.predictions, vec![1]);
}

#[tokio::test]
async fn test_empty_features_rejected() {
    let server = test_server();

    let response = server.post("/predict").json(&json!({ "features": [] })).await;

    response.assert_status_bad_request();

    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("non-empty"));
}

#[tokio::test]
async fn test_empty_row_rejected() {
    let server = test_server();

    let response = server
        .post("/predict")
        .json(&json!({ "features": [[1.0, 2.0], []] }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_jagged_features_rejected() {
    let server = test_server();

    let response = server
        .post("/predict")
        .json(&json!({ "features": [[1.0, 2.0], [3.0]] }))
        .await;

    response.assert_status_bad_request();

    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("shape error"));
}

#[tokio::test]
async fn test_missing_features_field_rejected() {
    let server = test_server();

    let response = server.post("/predict").json(&json!({})).await;

    let status = response.status_code().as_u16();
    assert!((400..500).contains(&status), "expected 4xx, got {}", status);
}

#[tokio::test]
async fn test_non_numeric_features_rejected() {
    let server = test_server();

    let response = server
        .post("/predict")
        .json(&json!({ "features": [["not", "numbers"]] }))
        .await;

    let status = response.status_code().as_u16();
    assert!((400..500).contains(&status), "expected 4xx, got {}", status);
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model_version"], "v1.0.0");
    assert!(body["uptime_secs"].as_i64().unwrap() >= 0);
}
