//! Cache wrapper with injectable failures for testing.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::cache::{CacheError, MemoryCache, RestaurantCache};
use crate::restaurant::Restaurant;

/// A RestaurantCache that can be told to fail reads or writes.
///
/// Delegates to an in-memory cache until a failure flag is set, at which
/// point the flagged operation returns a storage error instead.
pub struct FlakyCache {
    inner: MemoryCache,
    fail_reads: Arc<RwLock<bool>>,
    fail_writes: Arc<RwLock<bool>>,
}

impl Default for FlakyCache {
    fn default() -> Self {
        Self::new()
    }
}

impl FlakyCache {
    pub fn new() -> Self {
        Self {
            inner: MemoryCache::new(),
            fail_reads: Arc::new(RwLock::new(false)),
            fail_writes: Arc::new(RwLock::new(false)),
        }
    }

    /// Make subsequent reads fail with a storage error.
    pub async fn set_fail_reads(&self, fail: bool) {
        *self.fail_reads.write().await = fail;
    }

    /// Make subsequent writes fail with a storage error.
    pub async fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.write().await = fail;
    }
}

#[async_trait]
impl RestaurantCache for FlakyCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<Restaurant>>, CacheError> {
        if *self.fail_reads.read().await {
            return Err(CacheError::Storage("injected read failure".to_string()));
        }
        self.inner.get(key).await
    }

    async fn set(
        &self,
        key: &str,
        restaurants: Vec<Restaurant>,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        if *self.fail_writes.read().await {
            return Err(CacheError::Storage("injected write failure".to_string()));
        }
        self.inner.set(key, restaurants, ttl).await
    }

    async fn clear(&self) -> Result<(), CacheError> {
        self.inner.clear().await
    }

    async fn entry_count(&self) -> Result<usize, CacheError> {
        self.inner.entry_count().await
    }
}
