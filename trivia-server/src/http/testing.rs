//! Router test helpers backed by the in-memory store

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use super::server::build_router;
use crate::db::MemoryQuestionStore;
use crate::models::NewQuestion;
use crate::state::AppState;

pub(crate) fn question(text: &str, category: i32) -> NewQuestion {
    NewQuestion::new(text, format!("answer to {text}"), category, 1).unwrap()
}

/// `n` questions with ids 1..=n, categories cycling 1..=6.
pub(crate) fn numbered_store(n: usize) -> MemoryQuestionStore {
    MemoryQuestionStore::seeded(
        (0..n).map(|i| question(&format!("Question {}", i + 1), (i % 6) as i32 + 1)),
    )
}

pub(crate) fn app(store: MemoryQuestionStore) -> Router {
    build_router(AppState::new(Arc::new(store)))
}

/// Send one request and decode the JSON body.
pub(crate) async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Send a raw (possibly malformed) JSON body.
pub(crate) async fn send_raw(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
