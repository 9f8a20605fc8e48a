#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use shutterbook_api::config::ServerConfig;
use shutterbook_api::router::build_app_router;

/// Origin allowed by [`test_config`].
pub const TEST_ORIGIN: &str = "http://localhost:5173";

/// Body limit used by [`test_config`], small enough to exceed in a test.
pub const TEST_BODY_LIMIT: usize = 16 * 1024;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static(TEST_ORIGIN)],
        request_timeout_secs: 30,
        body_limit_bytes: TEST_BODY_LIMIT,
    }
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app() -> Router {
    build_app_router(&test_config())
}

/// Send a request with no body.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send `body` as JSON with the given method.
pub async fn send_json(app: Router, method: Method, uri: &str, body: &Value) -> Response {
    send_raw(app, method, uri, serde_json::to_vec(body).unwrap()).await
}

/// POST `body` as JSON.
pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

/// Send raw bytes labelled as JSON, for malformed or oversized bodies.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: Vec<u8>) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `field` of every reported validation error, in order.
pub fn error_fields(json: &Value) -> Vec<String> {
    json["errors"]
        .as_array()
        .expect("errors should be an array")
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect()
}
