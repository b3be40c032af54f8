//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the lunchbot server:
//! - HTTP request metrics (latency, counts, in-flight)
//! - Cache size (collected dynamically)
//!
//! Dispatch and upstream metrics live in the core crate and are registered
//! into the same registry here.

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
            "lunchbot_http_request_duration_seconds",
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
        Opts::new("lunchbot_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "lunchbot_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

// =============================================================================
// Cache Metrics (collected dynamically)
// =============================================================================

/// Live entries in the search result cache.
pub static CACHE_ENTRIES: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "lunchbot_cache_entries",
        "Number of entries in the search result cache",
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

    // Cache
    registry.register(Box::new(CACHE_ENTRIES.clone())).unwrap();

    // Core metrics (dispatch, upstream, cache hit rates)
    for metric in lunchbot_core::metrics::all_metrics() {
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

/// Collect dynamic metrics from current application state.
///
/// Called before encoding so gauges reflect the state at scrape time.
pub async fn collect_dynamic_metrics(state: &crate::state::AppState) {
    if let Ok(entries) = state.cache().entry_count().await {
        CACHE_ENTRIES.set(entries as i64);
    }
}

/// Normalize a path for metric labels.
///
/// Every route is static, so anything unrecognized collapses into a single
/// label to keep the cardinality bounded.
pub fn normalize_path(path: &str) -> String {
    match path {
        "/webhook" | "/health" | "/config" | "/metrics" | "/cache" | "/cache/stats" => {
            path.to_string()
        }
        _ => "other".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_known_routes() {
        assert_eq!(normalize_path("/webhook"), "/webhook");
        assert_eq!(normalize_path("/health"), "/health");
        assert_eq!(normalize_path("/cache/stats"), "/cache/stats");
    }

    #[test]
    fn test_normalize_path_unknown_routes_collapse() {
        assert_eq!(normalize_path("/favicon.ico"), "other");
        assert_eq!(normalize_path("/webhook/extra"), "other");
        assert_eq!(normalize_path("/"), "other");
    }

    #[test]
    fn test_encode_metrics_returns_prometheus_format() {
        // Access metrics to ensure they're initialized
        HTTP_REQUESTS_TOTAL
            .with_label_values(&["GET", "/test", "200"])
            .inc();

        let output = encode_metrics();
        assert!(output.contains("lunchbot_http_requests_total"));
        assert!(output.contains("# HELP"));
        assert!(output.contains("# TYPE"));
    }

    #[test]
    fn test_registry_contains_core_metrics() {
        // Touch metrics from both crates so they appear in output
        // (Prometheus only outputs metrics that have been accessed)
        HTTP_REQUEST_DURATION
            .with_label_values(&["GET", "/test", "200"])
            .observe(0.1);
        HTTP_REQUESTS_IN_FLIGHT.set(0);
        CACHE_ENTRIES.set(0);
        lunchbot_core::metrics::CACHE_HITS.inc();
        lunchbot_core::metrics::DISPATCHES
            .with_label_values(&["slack", "search", "ok"])
            .inc();

        let output = encode_metrics();

        // HTTP metrics
        assert!(output.contains("lunchbot_http_request_duration_seconds"));
        assert!(output.contains("lunchbot_http_requests_in_flight"));

        // Cache gauge
        assert!(output.contains("lunchbot_cache_entries"));

        // Core metrics registered alongside
        assert!(output.contains("lunchbot_cache_hits_total"));
        assert!(output.contains("lunchbot_dispatches_total"));
    }
}
