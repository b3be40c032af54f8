use axum::{
    middleware::from_fn,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::middleware::metrics_middleware;
use super::{cache, handlers, webhook};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Webhook entry point for chat platforms
        .route("/webhook", post(webhook::handle_webhook))
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Prometheus metrics
        .route("/metrics", get(handlers::metrics))
        // Cache management
        .route("/cache", delete(cache::clear_cache))
        .route("/cache/stats", get(cache::get_stats))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
