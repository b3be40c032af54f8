//! Cache management handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::info;

use crate::state::AppState;

// ============================================================================
// Response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CacheStatsResponse {
    pub entries: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub message: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /cache/stats
///
/// Get search result cache statistics.
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CacheStatsResponse>, impl IntoResponse> {
    match state.cache().entry_count().await {
        Ok(entries) => Ok(Json(CacheStatsResponse { entries })),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}

/// DELETE /cache
///
/// Drop all cached search results.
pub async fn clear_cache(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SuccessResponse>, impl IntoResponse> {
    match state.cache().clear().await {
        Ok(()) => {
            info!("Search result cache cleared");
            Ok(Json(SuccessResponse {
                message: "Cache cleared".to_string(),
            }))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}
