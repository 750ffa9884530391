use std::sync::{Arc, OnceLock};

use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use foodcheck_api::application::http::server::http_server::{router, state};
use foodcheck_api::args::Args;
use serde_json::{Value, json};

// The router installs a process-global Prometheus recorder, so build it once
// and clone it per test.
fn test_server() -> TestServer {
    static ROUTER: OnceLock<Router> = OnceLock::new();
    let router = ROUTER
        .get_or_init(|| {
            let args = Arc::new(Args::parse_from(["foodcheck-api"]));
            let state = state(args).expect("failed to build state");
            router(state).expect("failed to build router")
        })
        .clone();
    TestServer::new(router).expect("failed to start test server")
}

#[tokio::test]
async fn analyze_highly_processed_list() {
    let server = test_server();

    let response = server
        .post("/analysis/ingredients")
        .json(&json!({
            "ingredientsText": "emulsifier, artificial flavour, preservative"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 3, "response must have exactly three fields");
    assert_eq!(body["processingLevel"], "Highly processed");
    assert_eq!(
        body["frequency"],
        "Occasional treat only – about once a week or less."
    );
    assert!(!body["alternatives"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn analyze_plain_list_returns_defaults() {
    let server = test_server();

    let response = server
        .post("/analysis/ingredients")
        .json(&json!({ "ingredientsText": "Wheat flour, sugar" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["processingLevel"], "Less processed");
    assert_eq!(
        body["frequency"],
        "Safe for everyday consumption (in reasonable portions)."
    );
    assert_eq!(
        body["alternatives"],
        json!([
            "Fresh fruits and seasonal salads",
            "Homemade snacks with minimal ingredients",
            "Products with short, simple ingredient lists"
        ])
    );
}

#[tokio::test]
async fn analyze_unions_category_suggestions() {
    let server = test_server();

    let response = server
        .post("/analysis/ingredients")
        .json(&json!({ "ingredientsText": "biscuit with fruit juice" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["alternatives"],
        json!([
            "Whole grain crackers without added sugar",
            "Homemade biscuits using whole wheat flour and jaggery",
            "Plain water infused with lemon or mint",
            "Freshly made fruit juice without added sugar"
        ])
    );
}

#[tokio::test]
async fn analyze_is_idempotent_across_requests() {
    let server = test_server();
    let payload = json!({ "ingredientsText": "corn flakes cereal, palm oil" });

    let first: Value = server.post("/analysis/ingredients").json(&payload).await.json();
    let second: Value = server.post("/analysis/ingredients").json(&payload).await.json();
    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_ingredients_text_is_rejected() {
    let server = test_server();

    let response = server
        .post("/analysis/ingredients")
        .json(&json!({ "ingredientsText": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "ingredientsText is required");
}

#[tokio::test]
async fn missing_ingredients_text_is_rejected() {
    let server = test_server();

    let response = server.post("/analysis/ingredients").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "ingredientsText is required");
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let server = test_server();

    let response = server
        .post("/analysis/ingredients")
        .content_type("application/json")
        .text("not json at all")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid JSON in request body");
}

#[tokio::test]
async fn wrong_method_is_rejected() {
    let server = test_server();

    let response = server.get("/analysis/ingredients").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Method Not Allowed");
}

#[tokio::test]
async fn health_endpoints_respond() {
    let server = test_server();

    let live: Value = server.get("/health").await.json();
    assert_eq!(live["status"], "ok");

    let ready: Value = server.get("/health/ready").await.json();
    assert_eq!(ready["status"], "ready");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let server = test_server();

    let response = server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();
    let document: Value = response.json();
    assert!(
        document["paths"]
            .as_object()
            .unwrap()
            .contains_key("/analysis/ingredients")
    );
}
