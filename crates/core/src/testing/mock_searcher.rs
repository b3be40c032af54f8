//! Mock searcher for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::restaurant::Restaurant;
use crate::search::{RestaurantSearcher, SearchError, SearchRequest};

/// Mock implementation of the RestaurantSearcher trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable restaurant lists
/// - Track outgoing requests for assertions
/// - Simulate upstream failures
///
/// # Example
///
/// ```rust,ignore
/// use lunchbot_core::testing::{fixtures, MockSearcher};
///
/// let searcher = MockSearcher::new();
/// searcher.set_results(vec![
///     fixtures::restaurant(1, "Pizza Hut"),
/// ]).await;
///
/// let found = searcher.search(&request).await?;
/// assert_eq!(found.len(), 1);
///
/// let requests = searcher.recorded_requests().await;
/// assert_eq!(requests[0].search_phrase, "pizza");
/// ```
pub struct MockSearcher {
    /// Configured restaurants to return.
    results: Arc<RwLock<Vec<Restaurant>>>,
    /// Recorded search requests.
    requests: Arc<RwLock<Vec<SearchRequest>>>,
    /// If set, the next search will fail with this error.
    next_error: Arc<RwLock<Option<SearchError>>>,
}

impl std::fmt::Debug for MockSearcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockSearcher")
            .field("results", &"<results>")
            .field("requests", &"<requests>")
            .field("next_error", &"<next_error>")
            .finish()
    }
}

impl Default for MockSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSearcher {
    /// Create a new mock searcher with empty results.
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(Vec::new())),
            requests: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Set the restaurants to return for subsequent searches.
    pub async fn set_results(&self, results: Vec<Restaurant>) {
        *self.results.write().await = results;
    }

    /// Add a single restaurant to the results.
    pub async fn add_result(&self, restaurant: Restaurant) {
        self.results.write().await.push(restaurant);
    }

    /// Get recorded search requests.
    pub async fn recorded_requests(&self) -> Vec<SearchRequest> {
        self.requests.read().await.clone()
    }

    /// Get the number of searches performed.
    pub async fn search_count(&self) -> usize {
        self.requests.read().await.len()
    }

    /// Configure the next search to fail with the given error.
    pub async fn set_next_error(&self, error: SearchError) {
        *self.next_error.write().await = Some(error);
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<SearchError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl RestaurantSearcher for MockSearcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search(&self, request: &SearchRequest) -> Result<Vec<Restaurant>, SearchError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.requests.write().await.push(request.clone());

        Ok(self.results.read().await.clone())
    }
}
