//! 10bis search API client.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::TenbisConfig;
use crate::metrics;
use crate::restaurant::Restaurant;

use super::{RestaurantSearcher, SearchError, SearchRequest};

/// 10bis-backed restaurant searcher.
pub struct TenbisSearcher {
    client: Client,
    config: TenbisConfig,
}

impl TenbisSearcher {
    /// Create a new searcher with the given configuration.
    pub fn new(config: TenbisConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    async fn execute(&self, request: &SearchRequest) -> Result<Vec<Restaurant>, SearchError> {
        let url = request.url(&self.config.url);
        debug!(
            order_by = request.order_by.as_param(),
            phrase = %request.search_phrase,
            "Searching 10bis"
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                SearchError::Timeout
            } else if e.is_connect() {
                SearchError::ConnectionFailed(e.to_string())
            } else {
                SearchError::ApiError(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError(format!(
                "HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::ApiError(e.to_string()))?;

        let restaurants = parse_search_body(&body)?;
        debug!(results = restaurants.len(), "10bis search complete");

        Ok(restaurants)
    }
}

#[async_trait]
impl RestaurantSearcher for TenbisSearcher {
    fn name(&self) -> &str {
        "tenbis"
    }

    async fn search(&self, request: &SearchRequest) -> Result<Vec<Restaurant>, SearchError> {
        let result = self.execute(request).await;

        match &result {
            Ok(restaurants) => {
                metrics::UPSTREAM_REQUESTS
                    .with_label_values(&["success"])
                    .inc();
                metrics::UPSTREAM_RESULTS.observe(restaurants.len() as f64);
            }
            Err(SearchError::Timeout) => {
                metrics::UPSTREAM_REQUESTS
                    .with_label_values(&["timeout"])
                    .inc();
            }
            Err(_) => {
                metrics::UPSTREAM_REQUESTS.with_label_values(&["error"]).inc();
            }
        }

        result
    }
}

/// Parse the upstream response body into restaurants.
///
/// The API answers valid empty searches with `null`, an empty body or a
/// non-array value, all of which mean "no results". A body that fails to
/// parse as JSON at all is an upstream error.
fn parse_search_body(body: &str) -> Result<Vec<Restaurant>, SearchError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| SearchError::ApiError(format!("Failed to parse response: {}", e)))?;

    match value {
        Value::Array(_) => serde_json::from_value(value)
            .map_err(|e| SearchError::ApiError(format!("Failed to parse response: {}", e))),
        _ => Ok(Vec::new()),
    }
}
