// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::AppState;
use crate::store::AppStore;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use shelfgrid_persistence::InMemoryStore;
use tower::ServiceExt;

/// Helper to create test app state with an in-memory store.
fn create_test_app_state() -> AppState {
    AppState::new(AppStore::Memory(InMemoryStore::new()), 3)
}

/// Sends one request and returns the status and the JSON body
/// (`Value::Null` when the body is not JSON).
async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    editor: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(editor) = editor {
        builder = builder.header("x-editor", editor);
    }
    let request: Request<Body> = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

/// Creates a layout for `warehouse` and opens a session on it.
async fn create_and_open(app: &Router, warehouse: &str, rows: usize, columns: usize, height: u32) {
    let (status, _) = send(
        app,
        "PUT",
        &format!("/warehouses/{warehouse}/layout"),
        None,
        Some(serde_json::json!({ "rows": rows, "columns": columns, "height": height })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        app,
        "POST",
        &format!("/warehouses/{warehouse}/session"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
