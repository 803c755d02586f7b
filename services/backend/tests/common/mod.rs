//! Shared helpers: a mock catalog upstream and a one-shot request driver.
#![allow(dead_code)]

use axum::body::Body;
use axum::extract::Query;
use axum::http::{Request, StatusCode, Uri};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use tokio::net::TcpListener;
use tower::ServiceExt;

use backend::build_app;
use backend::settings::Settings;

/// Serve `app` on an ephemeral port and return its base URL.
pub async fn spawn_upstream(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Upstream that answers every GET with the raw path and decoded query it received.
pub fn echo_upstream() -> Router {
    Router::new().fallback(
        |uri: Uri, Query(params): Query<HashMap<String, String>>| async move {
            Json(json!({
                "path": uri.path(),
                "raw_query": uri.query(),
                "query": params,
            }))
        },
    )
}

/// A base URL nothing is listening on.
pub async fn dead_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn relay_for(upstream: &str) -> Router {
    let settings = Settings::with_upstream(upstream).expect("valid upstream url");
    build_app(&settings)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("router handled request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
