//! End-to-end tests for the payment token API.
//!
//! These tests drive the full router in-process with `tower::ServiceExt`,
//! exercising the same decode → validate → mint → respond path a real
//! HTTP request would take, without binding a socket.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use serde_json::{Value, json};
use tower::ServiceExt;

use payment_token_service::{app, registry::ServiceRegistry};

/// Build an app whose registry contains the given (service, method) pairs.
fn app_with(pairs: &[(&str, &str)]) -> Router {
    let registry = Arc::new(ServiceRegistry::new());
    for (service_id, method) in pairs {
        registry.register(service_id, method);
    }
    app(registry)
}

/// POST a JSON value to /api/v1/payment.
fn payment_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/payment")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn registered_pair_receives_token_with_echoed_interval() {
    let app = app_with(&[("svc", "pay")]);

    let response = app
        .oneshot(payment_request(&json!({
            "service_id": "svc",
            "method": "pay",
            "from": "2024-01-01T00:00:00Z",
            "to": "2024-01-31T00:00:00Z",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let body = body_json(response).await;

    // Token is present, non-empty, and decodes to exactly 32 random bytes
    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert_eq!(URL_SAFE.decode(token).unwrap().len(), 32);

    // Interval and method are echoed from the request
    assert_eq!(body["from"], "2024-01-01T00:00:00Z");
    assert_eq!(body["to"], "2024-01-31T00:00:00Z");
    assert_eq!(body["method"], "pay");
}

#[tokio::test]
async fn unregistered_pair_is_not_found() {
    let app = app_with(&[("svc", "pay")]);

    let response = app
        .oneshot(payment_request(&json!({
            "service_id": "svc",
            "method": "unknown",
            "from": "2024-01-01T00:00:00Z",
            "to": "2024-01-31T00:00:00Z",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Plain-text error body, no token anywhere in it
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_owned();
    assert!(content_type.starts_with("text/plain"));

    let body = body_text(response).await;
    assert_eq!(body, "Service or method not found");
}

#[tokio::test]
async fn unknown_service_is_not_found() {
    let app = app_with(&[("svc", "pay")]);

    let response = app
        .oneshot(payment_request(&json!({
            "service_id": "other",
            "method": "pay",
            "from": "2024-01-01T00:00:00Z",
            "to": "2024-01-31T00:00:00Z",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_field_is_a_bad_request() {
    // Registry is left empty: if decoding correctly fails first, the
    // response is 400 rather than the 404 an availability check would give
    let app = app_with(&[]);

    let response = app
        .oneshot(payment_request(&json!({
            "service_id": "svc",
            "method": "pay",
            "to": "2024-01-31T00:00:00Z",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wrong_field_type_is_a_bad_request() {
    let app = app_with(&[("svc", "pay")]);

    let response = app
        .oneshot(payment_request(&json!({
            "service_id": "svc",
            "method": "pay",
            "from": 42,
            "to": "2024-01-31T00:00:00Z",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_text(response).await;
    assert!(body.starts_with("Invalid request:"));
}

#[tokio::test]
async fn truncated_body_is_a_bad_request() {
    let app = app_with(&[("svc", "pay")]);

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/payment")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"service_id": "svc", "met"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn inverted_interval_is_passed_through() {
    // from > to is deliberately not validated
    let app = app_with(&[("svc", "pay")]);

    let response = app
        .oneshot(payment_request(&json!({
            "service_id": "svc",
            "method": "pay",
            "from": "2024-01-31T00:00:00Z",
            "to": "2024-01-01T00:00:00Z",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["from"], "2024-01-31T00:00:00Z");
    assert_eq!(body["to"], "2024-01-01T00:00:00Z");
}

#[tokio::test]
async fn repeated_requests_mint_distinct_tokens() {
    let app = app_with(&[("svc", "pay")]);
    let request_body = json!({
        "service_id": "svc",
        "method": "pay",
        "from": "2024-01-01T00:00:00Z",
        "to": "2024-01-31T00:00:00Z",
    });

    let first = body_json(
        app.clone()
            .oneshot(payment_request(&request_body))
            .await
            .unwrap(),
    )
    .await;
    let second = body_json(app.oneshot(payment_request(&request_body)).await.unwrap()).await;

    assert_ne!(first["token"], second["token"]);
}

#[tokio::test]
async fn health_reports_registry_population() {
    let app = app_with(&[
        ("service1", "method1"),
        ("service1", "method2"),
        ("service2", "method1"),
    ]);

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["registered_pairs"], 3);
}
