//! Routing of webhook payloads to replies.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::RestaurantCache;
use crate::config::{Config, LocationConfig};
use crate::messenger::{BotResponse, Messenger, INVALID_MESSAGE, SEARCH_UNAVAILABLE};
use crate::metrics;
use crate::restaurant::{dedupe_by_name, filter_positive_pool, sort_by_distance, Restaurant};
use crate::search::{RestaurantSearcher, SearchRequest};

use super::query::{parse_query, ParsedQuery};

/// HTTP-facing verdict for a dispatched payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchStatus {
    Ok,
    BadRequest,
}

impl DispatchStatus {
    fn label(self) -> &'static str {
        match self {
            DispatchStatus::Ok => "ok",
            DispatchStatus::BadRequest => "bad_request",
        }
    }
}

/// Body of a dispatched reply.
#[derive(Debug, Clone)]
pub enum ReplyBody {
    /// A platform-native message, rendered by the messenger that claimed
    /// the payload.
    Message(BotResponse),
    /// A plain text body, used when no messenger could shape the reply.
    Text(String),
}

/// The reply to one webhook payload.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    pub status: DispatchStatus,
    pub body: ReplyBody,
}

impl DispatchOutcome {
    fn ok(response: BotResponse) -> Self {
        Self {
            status: DispatchStatus::Ok,
            body: ReplyBody::Message(response),
        }
    }

    fn bad_request(response: BotResponse) -> Self {
        Self {
            status: DispatchStatus::BadRequest,
            body: ReplyBody::Message(response),
        }
    }

    fn bad_request_text(text: &str) -> Self {
        Self {
            status: DispatchStatus::BadRequest,
            body: ReplyBody::Text(text.to_string()),
        }
    }
}

/// Routes webhook payloads to replies.
///
/// Each payload is claimed by the first messenger that recognizes its
/// shape, normalized into a query, resolved against the cache or the
/// upstream search, and rendered back in the claiming platform's format.
pub struct Dispatcher {
    messengers: Vec<Arc<dyn Messenger>>,
    searcher: Arc<dyn RestaurantSearcher>,
    cache: Arc<dyn RestaurantCache>,
    location: LocationConfig,
    cache_enabled: bool,
    cache_ttl: Duration,
}

impl Dispatcher {
    pub fn new(
        messengers: Vec<Arc<dyn Messenger>>,
        searcher: Arc<dyn RestaurantSearcher>,
        cache: Arc<dyn RestaurantCache>,
        config: &Config,
    ) -> Self {
        Self {
            messengers,
            searcher,
            cache,
            location: config.location.clone(),
            cache_enabled: config.cache.enabled,
            cache_ttl: Duration::from_secs(config.cache.ttl_hours * 60 * 60),
        }
    }

    /// Dispatch one webhook payload to a reply.
    pub async fn dispatch(&self, payload: &Value) -> DispatchOutcome {
        let Some(messenger) = self.messengers.iter().find(|m| m.is_valid_message(payload)) else {
            debug!("No messenger recognized the payload");
            metrics::DISPATCHES
                .with_label_values(&["unknown", "none", "bad_request"])
                .inc();
            return DispatchOutcome::bad_request_text(INVALID_MESSAGE);
        };

        let (flow, outcome) = self.route(messenger.as_ref(), payload).await;
        metrics::DISPATCHES
            .with_label_values(&[messenger.name(), flow, outcome.status.label()])
            .inc();
        outcome
    }

    async fn route(
        &self,
        messenger: &dyn Messenger,
        payload: &Value,
    ) -> (&'static str, DispatchOutcome) {
        let Some(raw_query) = messenger.restaurant_name(payload) else {
            debug!(platform = messenger.name(), "Query text missing from payload");
            return (
                "none",
                DispatchOutcome::bad_request(messenger.error_response(None)),
            );
        };

        match parse_query(&raw_query) {
            ParsedQuery::Empty => {
                debug!(platform = messenger.name(), "Empty query, replying with usage");
                (
                    "none",
                    DispatchOutcome::bad_request(messenger.default_response()),
                )
            }
            ParsedQuery::Totals => ("totals", self.totals_flow(messenger).await),
            ParsedQuery::Search { phrase, exact } => {
                ("search", self.search_flow(messenger, &phrase, exact).await)
            }
        }
    }

    async fn search_flow(
        &self,
        messenger: &dyn Messenger,
        phrase: &str,
        exact: bool,
    ) -> DispatchOutcome {
        if let Some(cached) = self.cache_lookup(phrase).await {
            debug!(phrase, results = cached.len(), "Serving search from cache");
            return render_search(messenger, cached, phrase, exact);
        }

        let request = SearchRequest::for_phrase(&self.location, phrase, Utc::now());
        let restaurants = match self.searcher.search(&request).await {
            Ok(restaurants) => restaurants,
            Err(e) => {
                warn!(phrase, error = %e, "Upstream search failed");
                return DispatchOutcome::bad_request_text(SEARCH_UNAVAILABLE);
            }
        };
        debug!(phrase, results = restaurants.len(), "Upstream search completed");

        if restaurants.is_empty() {
            return DispatchOutcome::ok(messenger.error_response(Some(phrase)));
        }

        self.cache_store(phrase, &restaurants);
        render_search(messenger, restaurants, phrase, exact)
    }

    async fn totals_flow(&self, messenger: &dyn Messenger) -> DispatchOutcome {
        let request = SearchRequest::for_pool_totals(&self.location, Utc::now());
        let restaurants = match self.searcher.search(&request).await {
            Ok(restaurants) => restaurants,
            Err(e) => {
                warn!(error = %e, "Upstream totals search failed");
                return DispatchOutcome::bad_request_text(SEARCH_UNAVAILABLE);
            }
        };

        let pooled = dedupe_by_name(filter_positive_pool(restaurants), None);
        debug!(results = pooled.len(), "Totals search completed");
        DispatchOutcome::ok(messenger.total_orders_response(&pooled))
    }

    /// Look the phrase up in the cache. A failed read counts as a miss.
    async fn cache_lookup(&self, phrase: &str) -> Option<Vec<Restaurant>> {
        if !self.cache_enabled {
            return None;
        }
        match self.cache.get(phrase).await {
            Ok(Some(restaurants)) => {
                metrics::CACHE_HITS.inc();
                Some(restaurants)
            }
            Ok(None) => {
                metrics::CACHE_MISSES.inc();
                None
            }
            Err(e) => {
                warn!(phrase, error = %e, "Cache read failed");
                metrics::CACHE_MISSES.inc();
                None
            }
        }
    }

    /// Store live results without delaying the reply. A failed write is
    /// logged and otherwise dropped.
    fn cache_store(&self, phrase: &str, restaurants: &[Restaurant]) {
        if !self.cache_enabled {
            return;
        }
        let cache = Arc::clone(&self.cache);
        let key = phrase.to_string();
        let restaurants = restaurants.to_vec();
        let ttl = self.cache_ttl;
        tokio::spawn(async move {
            if let Err(e) = cache.set(&key, restaurants, ttl).await {
                warn!(key, error = %e, "Cache write failed");
            }
        });
    }
}

fn render_search(
    messenger: &dyn Messenger,
    restaurants: Vec<Restaurant>,
    phrase: &str,
    exact: bool,
) -> DispatchOutcome {
    let exact_name = exact.then_some(phrase);
    let restaurants = dedupe_by_name(sort_by_distance(restaurants), exact_name);
    if restaurants.is_empty() {
        return DispatchOutcome::ok(messenger.error_response(Some(phrase)));
    }
    DispatchOutcome::ok(messenger.search_response(&restaurants))
}
