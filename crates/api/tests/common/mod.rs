#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use survey_core::survey::{NewSurveyResponse, SurveyResponse};
use survey_db::{MemoryResponseStore, ResponseStore, StoreError};
use tower::ServiceExt;

use survey_api::config::ServerConfig;
use survey_api::router::build_app_router;
use survey_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: None,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<dyn ResponseStore>) -> Router {
    build_app_router(AppState { store }, &test_config())
}

/// A store whose every operation fails, standing in for an unreachable database.
pub struct FailingStore;

#[async_trait]
impl ResponseStore for FailingStore {
    async fn insert(&self, _input: &NewSurveyResponse) -> Result<SurveyResponse, StoreError> {
        Err(unreachable_database())
    }

    async fn list_newest_first(&self) -> Result<Vec<SurveyResponse>, StoreError> {
        Err(unreachable_database())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(unreachable_database())
    }
}

fn unreachable_database() -> StoreError {
    StoreError::Database(sqlx::Error::Protocol(
        "connection refused to db.internal:5432".into(),
    ))
}

pub fn memory_store() -> Arc<MemoryResponseStore> {
    Arc::new(MemoryResponseStore::new())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, "application/json", json.to_string()).await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: &str,
    body: impl Into<Body>,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
