#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use roster_api::config::{DatabaseConfig, ServerConfig};
use roster_api::router::build_app_router;
use roster_api::state::AppState;
use roster_core::manager::RoleManager;
use roster_core::memory::MemoryRoleStore;
use roster_core::role::{NewRole, Role};
use roster_core::store::{RoleStore, StoreError};
use roster_core::types::DbId;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
        },
    }
}

/// Build the full application router over a fresh in-memory role store.
///
/// The router is `Clone`; clones share the same store, so a test can issue
/// several requests against the same data with `app.clone()`.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(MemoryRoleStore::new()))
}

/// Build the full application router over the given store.
pub fn build_test_app_with(store: Arc<dyn RoleStore>) -> Router {
    let state = AppState {
        roles: RoleManager::new(store),
    };
    build_app_router(state, &test_config()).unwrap()
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Send a raw body with a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a role through the API and return its id.
pub async fn create_role(app: &Router, name: &str) -> i64 {
    let response = post_json(app.clone(), "/roles", serde_json::json!({ "name": name })).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["rol"]["id"].as_i64().unwrap()
}

/// Role store whose every call fails, for exercising the 500 paths.
pub struct FailingStore;

fn down<T>() -> Result<T, StoreError> {
    Err(StoreError::Unavailable("connection refused".into()))
}

#[async_trait]
impl RoleStore for FailingStore {
    async fn insert(&self, _role: &NewRole) -> Result<Role, StoreError> {
        down()
    }
    async fn find_by_id(&self, _id: DbId) -> Result<Option<Role>, StoreError> {
        down()
    }
    async fn list_active(&self) -> Result<Vec<Role>, StoreError> {
        down()
    }
    async fn find_name_conflict(
        &self,
        _name: &str,
        _exclude_id: DbId,
    ) -> Result<Option<Role>, StoreError> {
        down()
    }
    async fn save(&self, _role: &Role) -> Result<Option<Role>, StoreError> {
        down()
    }
    async fn ping(&self) -> Result<(), StoreError> {
        down()
    }
}
