//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Dispatch (per-platform message handling outcomes)
//! - The 10bis upstream (request results, result counts)
//! - The search result cache (hits, misses)

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts};

// =============================================================================
// Dispatch Metrics
// =============================================================================

/// Dispatched webhook messages by platform, flow and outcome.
pub static DISPATCHES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("lunchbot_dispatches_total", "Total dispatched messages"),
        &["platform", "flow", "outcome"], // flow: "search", "totals", "none"; outcome: "ok", "bad_request"
    )
    .unwrap()
});

// =============================================================================
// Upstream Metrics
// =============================================================================

/// 10bis requests total by result.
pub static UPSTREAM_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "lunchbot_upstream_requests_total",
            "Total 10bis search requests",
        ),
        &["result"], // "success", "error", "timeout"
    )
    .unwrap()
});

/// Restaurants returned per upstream request.
pub static UPSTREAM_RESULTS: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "lunchbot_upstream_results",
            "Number of restaurants returned per 10bis request",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0]),
    )
    .unwrap()
});

// =============================================================================
// Cache Metrics
// =============================================================================

/// Cache hits total.
pub static CACHE_HITS: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("lunchbot_cache_hits_total", "Total search cache hits").unwrap()
});

/// Cache misses total.
pub static CACHE_MISSES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("lunchbot_cache_misses_total", "Total search cache misses").unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(DISPATCHES.clone()),
        Box::new(UPSTREAM_REQUESTS.clone()),
        Box::new(UPSTREAM_RESULTS.clone()),
        Box::new(CACHE_HITS.clone()),
        Box::new(CACHE_MISSES.clone()),
    ]
}
