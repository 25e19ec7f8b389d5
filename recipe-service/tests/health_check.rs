mod common;

use axum::http::StatusCode;
use common::{send, spawn_with_failing_store, TestApp};

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn();

    let (status, body) = app.request("GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "recipe-service");
}

#[tokio::test]
async fn health_check_reports_unreachable_store() {
    let router = spawn_with_failing_store();

    let (status, body) = send(&router, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
}

#[tokio::test]
async fn readiness_check_follows_store() {
    let app = TestApp::spawn();
    let (status, _) = app.request("GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&spawn_with_failing_store(), "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, serde_json::json!({ "error": "Service unavailable" }));
}

#[tokio::test]
async fn openapi_document_lists_recipe_routes() {
    let app = TestApp::spawn();

    let (status, body) = app
        .request("GET", "/.well-known/openapi.json", None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Recipes API");
    assert!(body["paths"]["/recipes"]["get"].is_object());
    assert!(body["paths"]["/recipes"]["post"].is_object());
    assert!(body["paths"]["/recipes/{id}"]["put"].is_object());
    assert!(body["paths"]["/recipes/{id}"]["delete"].is_object());
}
