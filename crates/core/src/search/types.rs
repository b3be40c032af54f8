//! Types for the restaurant search seam.

use async_trait::async_trait;
use thiserror::Error;

use crate::restaurant::Restaurant;

use super::SearchRequest;

/// Errors that can occur while querying the search upstream.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search service connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Search service API error: {0}")]
    ApiError(String),

    #[error("Request timeout")]
    Timeout,
}

/// Trait for restaurant search backends.
#[async_trait]
pub trait RestaurantSearcher: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Execute a search and return the raw, unprocessed result list.
    ///
    /// An empty list is a valid answer; errors are reserved for failed
    /// round trips and unreadable responses.
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Restaurant>, SearchError>;
}
