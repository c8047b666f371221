use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use gatekeeper_core::SanitizedConfig;
use serde::Serialize;
use std::sync::Arc;

use crate::metrics::{encode_metrics, UPLOAD_REJECTIONS};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error response for a request rejected before analysis.
pub(crate) fn reject(
    status: StatusCode,
    reason: &'static str,
    error: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    UPLOAD_REJECTIONS.with_label_values(&[reason]).inc();
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<SanitizedConfig> {
    Json(state.sanitized_config())
}

/// GET /api/v1/metrics
///
/// Prometheus text exposition format.
pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        encode_metrics(),
    )
}
