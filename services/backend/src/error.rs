use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Everything that can go wrong while relaying: connect/timeout failures, a
/// non-2xx upstream status, or a body that isn't JSON. All of them surface the
/// same way to the client.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": self.to_string()})),
        )
            .into_response()
    }
}
