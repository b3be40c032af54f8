//! Dispatch flow integration tests.
//!
//! These tests drive the dispatcher through the public crate API, checking
//! how the cache, the searcher and the messengers compose across repeated
//! webhook calls.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};

use lunchbot_core::{
    config::{CacheConfig, Config, LocationConfig, ServerConfig, TenbisConfig},
    testing::{fixtures, FlakyCache, MockSearcher},
    DispatchOutcome, DispatchStatus, Dispatcher, MemoryCache, Messenger, ReplyBody,
    RestaurantCache,
};
use lunchbot_core::{HipChatMessenger, SlackMessenger};

fn test_config(cache_enabled: bool) -> Config {
    Config {
        location: LocationConfig {
            user_id: "test-user".to_string(),
            city_id: "24".to_string(),
            street_id: "9000".to_string(),
            latitude: 32.07,
            longitude: 34.79,
            house_number: "12".to_string(),
        },
        server: ServerConfig::default(),
        tenbis: TenbisConfig::default(),
        cache: CacheConfig {
            enabled: cache_enabled,
            ttl_hours: 24,
        },
    }
}

fn build_dispatcher(
    searcher: Arc<MockSearcher>,
    cache: Arc<dyn RestaurantCache>,
    cache_enabled: bool,
) -> Dispatcher {
    let messengers: Vec<Arc<dyn Messenger>> = vec![
        Arc::new(HipChatMessenger::new()),
        Arc::new(SlackMessenger::new()),
    ];
    Dispatcher::new(messengers, searcher, cache, &test_config(cache_enabled))
}

fn slack_payload(text: &str) -> Value {
    json!({
        "command": "/10bis",
        "text": text,
        "user_name": "tester",
        "channel_id": "C12345"
    })
}

fn body_json(outcome: &DispatchOutcome) -> Value {
    match &outcome.body {
        ReplyBody::Message(response) => {
            serde_json::to_value(response).expect("serializable response")
        }
        ReplyBody::Text(text) => Value::String(text.clone()),
    }
}

/// Let the fire-and-forget cache write task run to completion.
async fn drain_cache_writes() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_repeated_search_is_served_from_cache() {
    let searcher = Arc::new(MockSearcher::new());
    searcher
        .set_results(vec![
            fixtures::restaurant(1, "Pizza Hut"),
            fixtures::restaurant(2, "Pizza Roma"),
        ])
        .await;
    let dispatcher = build_dispatcher(searcher.clone(), Arc::new(MemoryCache::new()), true);

    let first = dispatcher.dispatch(&slack_payload("pizza")).await;
    drain_cache_writes().await;
    let second = dispatcher.dispatch(&slack_payload("pizza")).await;

    assert_eq!(searcher.search_count().await, 1);
    assert_eq!(first.status, DispatchStatus::Ok);
    assert_eq!(second.status, DispatchStatus::Ok);
    assert_eq!(body_json(&first), body_json(&second));
}

#[tokio::test]
async fn test_disabled_cache_always_calls_upstream() {
    let searcher = Arc::new(MockSearcher::new());
    searcher
        .set_results(vec![fixtures::restaurant(1, "Pizza Hut")])
        .await;
    let cache = Arc::new(MemoryCache::new());
    let dispatcher = build_dispatcher(searcher.clone(), cache.clone(), false);

    dispatcher.dispatch(&slack_payload("pizza")).await;
    drain_cache_writes().await;
    dispatcher.dispatch(&slack_payload("pizza")).await;

    assert_eq!(searcher.search_count().await, 2);
    assert_eq!(cache.entry_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_totals_are_never_cached() {
    let searcher = Arc::new(MockSearcher::new());
    searcher
        .set_results(vec![fixtures::pooled_restaurant(1, "Pasta Basta", 200.0)])
        .await;
    let cache = Arc::new(MemoryCache::new());
    let dispatcher = build_dispatcher(searcher.clone(), cache.clone(), true);

    dispatcher.dispatch(&slack_payload("total")).await;
    drain_cache_writes().await;
    dispatcher.dispatch(&slack_payload("total")).await;

    assert_eq!(searcher.search_count().await, 2);
    assert_eq!(cache.entry_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_quoted_and_plain_phrase_share_a_cache_entry() {
    let searcher = Arc::new(MockSearcher::new());
    searcher
        .set_results(vec![
            fixtures::restaurant(1, "Pizza Hut"),
            fixtures::restaurant(2, "Pizza Roma"),
        ])
        .await;
    let dispatcher = build_dispatcher(searcher.clone(), Arc::new(MemoryCache::new()), true);

    // The cache key is the phrase with quotes already stripped, so the
    // exact search and the plain search resolve to one upstream call.
    let exact = dispatcher.dispatch(&slack_payload("\"Pizza Hut\"")).await;
    drain_cache_writes().await;
    let plain = dispatcher.dispatch(&slack_payload("Pizza Hut")).await;

    assert_eq!(searcher.search_count().await, 1);

    let exact_attachments = body_json(&exact)["attachments"]
        .as_array()
        .map(Vec::len)
        .unwrap_or_default();
    let plain_attachments = body_json(&plain)["attachments"]
        .as_array()
        .map(Vec::len)
        .unwrap_or_default();
    assert_eq!(exact_attachments, 1);
    assert_eq!(plain_attachments, 2);
}

#[tokio::test]
async fn test_cache_write_failure_does_not_affect_the_reply() {
    let searcher = Arc::new(MockSearcher::new());
    searcher
        .set_results(vec![fixtures::restaurant(1, "Pizza Hut")])
        .await;
    let cache = Arc::new(FlakyCache::new());
    cache.set_fail_writes(true).await;
    let dispatcher = build_dispatcher(searcher.clone(), cache.clone(), true);

    let first = dispatcher.dispatch(&slack_payload("pizza")).await;
    drain_cache_writes().await;
    let second = dispatcher.dispatch(&slack_payload("pizza")).await;

    assert_eq!(first.status, DispatchStatus::Ok);
    assert_eq!(second.status, DispatchStatus::Ok);
    // Nothing was stored, so both searches reached upstream.
    assert_eq!(searcher.search_count().await, 2);
    assert_eq!(cache.entry_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_cache_read_failure_falls_back_to_upstream() {
    let searcher = Arc::new(MockSearcher::new());
    searcher
        .set_results(vec![fixtures::restaurant(1, "Pizza Hut")])
        .await;
    let cache = Arc::new(FlakyCache::new());
    let dispatcher = build_dispatcher(searcher.clone(), cache.clone(), true);

    dispatcher.dispatch(&slack_payload("pizza")).await;
    drain_cache_writes().await;

    cache.set_fail_reads(true).await;
    let outcome = dispatcher.dispatch(&slack_payload("pizza")).await;

    assert_eq!(outcome.status, DispatchStatus::Ok);
    assert_eq!(searcher.search_count().await, 2);
}

#[tokio::test]
async fn test_empty_results_are_not_cached() {
    let searcher = Arc::new(MockSearcher::new());
    let cache = Arc::new(MemoryCache::new());
    let dispatcher = build_dispatcher(searcher.clone(), cache.clone(), true);

    dispatcher.dispatch(&slack_payload("quinoa")).await;
    drain_cache_writes().await;
    dispatcher.dispatch(&slack_payload("quinoa")).await;

    assert_eq!(searcher.search_count().await, 2);
    assert_eq!(cache.entry_count().await.unwrap(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_expired_entries_fall_back_to_upstream() {
    let searcher = Arc::new(MockSearcher::new());
    searcher
        .set_results(vec![fixtures::restaurant(1, "Pizza Hut")])
        .await;
    let dispatcher = build_dispatcher(searcher.clone(), Arc::new(MemoryCache::new()), true);

    dispatcher.dispatch(&slack_payload("pizza")).await;
    drain_cache_writes().await;

    tokio::time::advance(Duration::from_secs(25 * 60 * 60)).await;
    dispatcher.dispatch(&slack_payload("pizza")).await;

    assert_eq!(searcher.search_count().await, 2);
}

#[tokio::test]
async fn test_different_phrases_get_separate_entries() {
    let searcher = Arc::new(MockSearcher::new());
    searcher
        .set_results(vec![fixtures::restaurant(1, "Pizza Hut")])
        .await;
    let cache = Arc::new(MemoryCache::new());
    let dispatcher = build_dispatcher(searcher.clone(), cache.clone(), true);

    dispatcher.dispatch(&slack_payload("pizza")).await;
    drain_cache_writes().await;
    dispatcher.dispatch(&slack_payload("sushi")).await;
    drain_cache_writes().await;

    assert_eq!(searcher.search_count().await, 2);
    assert_eq!(cache.entry_count().await.unwrap(), 2);
}
