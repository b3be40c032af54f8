//! Common test utilities for webhook testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with a mock upstream searcher injected, enabling full webhook testing
//! without reaching the live 10bis endpoint.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use lunchbot_core::config::{CacheConfig, Config, LocationConfig, ServerConfig, TenbisConfig};
use lunchbot_core::testing::MockSearcher;
use lunchbot_core::{
    Dispatcher, HipChatMessenger, MemoryCache, Messenger, RestaurantCache, RestaurantSearcher,
    SlackMessenger,
};

/// Re-export fixtures for test convenience
pub use lunchbot_core::testing::fixtures;

/// Test fixture for webhook testing with a mock upstream.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_search() {
///     let fixture = TestFixture::new().await;
///     fixture.searcher.set_results(vec![
///         fixtures::restaurant(1, "Pizza Hut"),
///     ]).await;
///
///     let response = fixture.post("/webhook", json!({
///         "command": "/10bis", "text": "pizza"
///     })).await;
///
///     assert_status!(response, StatusCode::OK);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock searcher - configure search results and failures
    pub searcher: Arc<MockSearcher>,
    /// The cache behind the dispatcher
    pub cache: Arc<dyn RestaurantCache>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    /// Raw body text, for plain text replies
    pub text: String,
    /// Body parsed as JSON, Null when it is not JSON
    pub body: Value,
}

/// Configuration for test fixture.
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Whether the search result cache is enabled
    pub cache_enabled: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            cache_enabled: true,
        }
    }
}

impl TestFixture {
    /// Create a new test fixture with the cache enabled.
    pub async fn new() -> Self {
        Self::with_config(TestConfig::default()).await
    }

    /// Create a test fixture with custom configuration.
    pub async fn with_config(test_config: TestConfig) -> Self {
        let searcher = Arc::new(MockSearcher::new());
        let cache: Arc<dyn RestaurantCache> = Arc::new(MemoryCache::new());

        let config = Config {
            location: LocationConfig {
                user_id: "test-user".to_string(),
                city_id: "24".to_string(),
                street_id: "9000".to_string(),
                latitude: 32.07,
                longitude: 34.79,
                house_number: "12".to_string(),
            },
            server: ServerConfig {
                host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
                port: 0, // Not used for in-process testing
            },
            tenbis: TenbisConfig::default(),
            cache: CacheConfig {
                enabled: test_config.cache_enabled,
                ttl_hours: 24,
            },
        };

        let messengers: Vec<Arc<dyn Messenger>> = vec![
            Arc::new(HipChatMessenger::new()),
            Arc::new(SlackMessenger::new()),
        ];
        let dispatcher = Arc::new(Dispatcher::new(
            messengers,
            Arc::clone(&searcher) as Arc<dyn RestaurantSearcher>,
            Arc::clone(&cache),
            &config,
        ));

        let state = Arc::new(lunchbot_server::state::AppState::new(
            config,
            dispatcher,
            Arc::clone(&cache),
        ));

        let router = lunchbot_server::api::create_router(state);

        Self {
            router,
            searcher,
            cache,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request("DELETE", path, None).await
    }

    /// Send a POST request with a form-encoded body, the way Slack posts
    /// slash commands.
    pub async fn post_form(&self, path: &str, pairs: &[(&str, &str)]) -> TestResponse {
        let body = serde_urlencoded::to_string(pairs).expect("Failed to encode form body");
        self.request_raw("POST", path, &body, "application/x-www-form-urlencoded")
            .await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        self.request_raw("POST", path, body, "application/json")
            .await
    }

    /// Send a request with raw string body and custom content type.
    async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: &str,
        content_type: &str,
    ) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", content_type)
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        let request = request_builder.body(body).unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, text, body }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status, $response.status, $response.text
        );
    };
}
