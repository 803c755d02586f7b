use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use crate::controllers::RelayController;
use crate::models::route::ROUTES;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub upstream: String,
    pub routes: Vec<String>,
}

pub async fn root_route(State(relay): State<RelayController>) -> impl IntoResponse {
    Json(ServiceInfo {
        service: env!("CARGO_PKG_NAME"),
        upstream: relay.upstream_url().to_string(),
        routes: ROUTES.iter().map(|r| format!("/api{}", r.path)).collect(),
    })
}

pub async fn health_check_route() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}
