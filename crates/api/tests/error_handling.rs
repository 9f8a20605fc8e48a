//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router is
//! involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use shutterbook_api::error::AppError;
use shutterbook_core::error::CoreError;
use shutterbook_core::validation::{FieldFailure, ValidationFailure};

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn validation_failure_returns_400_with_field_errors() {
    let failure = ValidationFailure::new(vec![
        FieldFailure::new("body.email", "Please provide a valid email"),
        FieldFailure::new("body.name", "Name must be between 2 and 50 characters"),
    ])
    .unwrap();

    let (status, json) = error_to_response(CoreError::Validation(failure).into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Validation failed");
    assert_eq!(json["errors"][0]["field"], "body.email");
    assert_eq!(json["errors"][0]["message"], "Please provide a valid email");
    assert_eq!(json["errors"][1]["field"], "body.name");
    assert!(json.get("code").is_none());
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Package",
        id: "cjld2cjxh0000qzrmn831i7rn".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(
        json["message"],
        "Package with id cjld2cjxh0000qzrmn831i7rn not found"
    );
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["message"], "invalid field value");
}

#[tokio::test]
async fn payload_too_large_returns_413() {
    let (status, json) = error_to_response(AppError::PayloadTooLarge).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["code"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret connection string leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], "An internal error occurred");
}

#[tokio::test]
async fn core_internal_error_is_sanitized_too() {
    let err = AppError::Core(CoreError::Internal("stack trace".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "An internal error occurred");
}
