// Shared fixtures for inbound adapter tests: an application state over the in memory
// store plus small request and response helpers.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use crate::shell::state::AppState;

pub fn make_test_state() -> (Arc<InMemoryDocumentStore>, AppState) {
    let store = Arc::new(InMemoryDocumentStore::new());
    let state = AppState::new(store.clone());
    (store, state)
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryDocumentStore::new();
    store.toggle_offline();
    AppState::new(Arc::new(store))
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

/// Send one request and decode the JSON body, `Value::Null` when the body is not JSON.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
