//! Request-level tests driving the full router against a seeded in-memory database.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::server::{router, state::AppState};

mod api;
mod article;
mod topic;

/// Builds the application over a freshly seeded database.
async fn seeded_app() -> Router {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();

    router::app(AppState::new(test.db.unwrap()))
}

/// Sends one request and returns the status with the parsed JSON body.
///
/// An empty body is returned as `Value::Null`.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

fn msg(body: &Value) -> &str {
    body["msg"].as_str().unwrap_or_default()
}
