//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Torrent metadata extraction
//! - Release analyses (verdicts, failing checks)
//! - Enrichment lookups

use once_cell::sync::Lazy;
use prometheus::{core::Collector, IntCounterVec, Opts};

/// Torrent extractions by result.
pub static TORRENT_EXTRACTIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "gatekeeper_torrent_extractions_total",
            "Total .torrent metadata extractions",
        ),
        &["result"], // "ok", "invalid"
    )
    .unwrap()
});

/// Completed analyses by overall verdict.
pub static ANALYSES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("gatekeeper_analyses_total", "Total release analyses"),
        &["verdict"],
    )
    .unwrap()
});

/// Failing checks by check code.
pub static CHECK_FAILURES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "gatekeeper_check_failures_total",
            "Total failing checks by code",
        ),
        &["code"],
    )
    .unwrap()
});

/// Enrichment lookups by result.
pub static ENRICHMENT_LOOKUPS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "gatekeeper_enrichment_lookups_total",
            "Total enrichment lookups",
        ),
        &["result"], // "ok", "error"
    )
    .unwrap()
});

/// All core metrics, for registration in the server's registry.
pub fn all_metrics() -> Vec<Box<dyn Collector>> {
    vec![
        Box::new(TORRENT_EXTRACTIONS.clone()),
        Box::new(ANALYSES_TOTAL.clone()),
        Box::new(CHECK_FAILURES.clone()),
        Box::new(ENRICHMENT_LOOKUPS.clone()),
    ]
}
