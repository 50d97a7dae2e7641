//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each failure renders the `{ok, message, status}`
//! envelope with a matching HTTP status code. They do NOT need an HTTP
//! server -- they call `IntoResponse` directly on `AppError` values.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use roster_api::error::AppError;
use roster_core::error::{RoleError, RoleOp};
use roster_core::store::StoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_returns_404_envelope() {
    let (status, json) = error_to_response(RoleError::NotFound { id: 42 }.into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["ok"], false);
    assert_eq!(json["status"], 404);
    assert_eq!(json["message"], "role not found");
}

#[tokio::test]
async fn validation_failures_return_400_envelope() {
    let (status, json) = error_to_response(RoleError::NameRequired.into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "name is required");

    let (status, json) = error_to_response(
        RoleError::NameTaken {
            name: "admin".into(),
        }
        .into(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "role name already exists");
}

#[tokio::test]
async fn empty_listing_returns_404_envelope() {
    let (status, json) = error_to_response(RoleError::NoActiveRoles.into()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "no roles found");
}

#[tokio::test]
async fn storage_failure_returns_500_and_hides_cause() {
    let err = RoleError::Storage {
        op: RoleOp::Update,
        source: StoreError::Unavailable("password authentication failed".into()),
    };

    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], 500);
    assert_eq!(json["message"], "error updating role");
    assert!(!json.to_string().contains("password"));
}

#[tokio::test]
async fn bad_request_returns_400_with_message() {
    let err = AppError::BadRequest("Failed to parse the request body as JSON".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["ok"], false);
    assert_eq!(json["message"], "Failed to parse the request body as JSON");
}
