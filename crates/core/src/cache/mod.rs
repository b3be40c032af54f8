//! TTL cache for upstream search results.

mod memory;

pub use memory::MemoryCache;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::restaurant::Restaurant;

/// Errors that can occur in a cache backend.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache storage error: {0}")]
    Storage(String),
}

/// Trait for search result cache backends.
///
/// Keys are normalized query phrases; values are the raw upstream result
/// lists, stored before any post-processing so that exact-match filtering
/// can still run against a cached entry.
#[async_trait]
pub trait RestaurantCache: Send + Sync {
    /// Look up a cached result list. Expired entries read as absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<Restaurant>>, CacheError>;

    /// Store a result list under `key` for `ttl`.
    async fn set(&self, key: &str, restaurants: Vec<Restaurant>, ttl: Duration)
        -> Result<(), CacheError>;

    /// Drop every entry.
    async fn clear(&self) -> Result<(), CacheError>;

    /// Number of live (non-expired) entries.
    async fn entry_count(&self) -> Result<usize, CacheError>;
}
