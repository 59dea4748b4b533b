#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use lyceum_api::config::ServerConfig;
use lyceum_api::router::build_app_router;
use lyceum_api::state::AppState;
use lyceum_core::secret::WriteSecret;
use lyceum_db::store::MemoryStore;
use serde_json::Value;
use tower::ServiceExt;

/// Secret accepted by the test app.
pub const TEST_SECRET: &str = "test-secret";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "mongodb://unused".to_string(),
        database_name: "lyceum_test".to_string(),
        write_secret: WriteSecret::new(TEST_SECRET),
        request_timeout_secs: 30,
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// Uses the production [`build_app_router`] so tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery).
pub fn build_test_app() -> Router {
    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::DELETE, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a body without any `Content-Type` header.
pub async fn send_untyped(app: Router, method: Method, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// A complete write payload carrying the given `auth` value.
pub fn full_payload(name_en: &str, auth: &str) -> Value {
    serde_json::json!({
        "name_ru": format!("{name_en} (ru)"),
        "name_en": name_en,
        "name_ua": format!("{name_en} (ua)"),
        "description_ru": "Описание",
        "description_en": "Description",
        "description_ua": "Опис",
        "photo": format!("https://cdn.example/{name_en}.jpg"),
        "auth": auth,
    })
}

/// Create a record through the API and return its id.
pub async fn create(app: &Router, collection: &str, name_en: &str) -> String {
    let response = post_json(
        app.clone(),
        &format!("/{collection}"),
        full_payload(name_en, TEST_SECRET),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await["_id"]
        .as_str()
        .unwrap()
        .to_string()
}
