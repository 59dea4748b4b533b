//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests call `IntoResponse` directly on `AppError` values; no router
//! or store is involved.

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use lyceum_api::error::AppError;
use lyceum_core::error::CoreError;
use lyceum_db::StoreError;

/// Helper: convert an `AppError` into its status, content type and raw body.
async fn error_to_response(err: AppError) -> (StatusCode, String, String) {
    let response = err.into_response();
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

fn parse(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap()
}

// ---------------------------------------------------------------------------
// Client-contract errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn forbidden_returns_403_with_message() {
    let (status, content_type, body) =
        error_to_response(AppError::Core(CoreError::Forbidden)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(content_type.starts_with("application/json"));
    assert_eq!(
        parse(&body)["message"],
        "You do not have permission to perform this action"
    );
}

#[tokio::test]
async fn not_found_returns_plain_text_with_entity() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Teacher",
        id: "64b7f0c2a1b2c3d4e5f60718".into(),
    });

    let (status, content_type, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(body, "Teacher not found");
}

#[tokio::test]
async fn invalid_language_returns_plain_text_400() {
    let err = AppError::Core(CoreError::InvalidLanguage("fr".into()));

    let (status, content_type, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(body, "Invalid language");
}

// ---------------------------------------------------------------------------
// Envelope errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400_envelope() {
    let err = AppError::Core(CoreError::Validation("page must be a positive integer".into()));

    let (status, _, body) = error_to_response(err).await;
    let json = parse(&body);

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "page must be a positive integer");
}

#[tokio::test]
async fn bad_request_returns_400_envelope() {
    let (status, _, body) = error_to_response(AppError::BadRequest("bad body".into())).await;
    let json = parse(&body);

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "bad body");
}

#[tokio::test]
async fn storage_error_surfaces_driver_message() {
    let err = AppError::Store(StoreError::Decode("document has no _id".into()));

    let (status, _, body) = error_to_response(err).await;
    let json = parse(&body);

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "STORAGE_ERROR");
    assert_eq!(json["error"], "Malformed document: document has no _id");
}
