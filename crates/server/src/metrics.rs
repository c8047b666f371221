//! Prometheus metrics for observability.
//!
//! This module provides HTTP request metrics for the gatekeeper server and
//! registers them together with the core analysis metrics in one registry.

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "gatekeeper_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("gatekeeper_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "gatekeeper_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

/// Uploads rejected before analysis, by reason.
pub static UPLOAD_REJECTIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "gatekeeper_upload_rejections_total",
            "Requests rejected before analysis",
        ),
        &["reason"], // "category", "missing_title", "multipart", "missing_file"
    )
    .unwrap()
});

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    // HTTP
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();
    registry
        .register(Box::new(UPLOAD_REJECTIONS.clone()))
        .unwrap();

    // Core metrics (analyses, extraction, enrichment)
    for metric in gatekeeper_core::metrics::all_metrics() {
        registry.register(metric).unwrap();
    }
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

/// Paths served by the API, as reported in metric labels.
pub const ROUTE_PATHS: &[&str] = &[
    "/api/v1/health",
    "/api/v1/config",
    "/api/v1/analyses",
    "/api/v1/analyses/title",
    "/api/v1/torrents/inspect",
    "/api/v1/metrics",
];

/// Label for every path outside [`ROUTE_PATHS`].
pub const UNMATCHED_PATH: &str = "{unmatched}";

/// Normalize a path for metric labels.
///
/// Unknown paths share one label so arbitrary request URIs cannot grow the
/// label set.
pub fn normalize_path(path: &str) -> String {
    ROUTE_PATHS
        .iter()
        .find(|route| **route == path)
        .copied()
        .unwrap_or(UNMATCHED_PATH)
        .to_string()
}
