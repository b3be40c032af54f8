//! In-memory TTL cache.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::restaurant::Restaurant;

use super::{CacheError, RestaurantCache};

#[derive(Debug, Clone)]
struct CacheEntry {
    restaurants: Vec<Restaurant>,
    expires_at: Instant,
}

/// Process-local cache over a `RwLock`-guarded map.
///
/// Eviction is lazy: expired entries are dropped when a read lands on them
/// and swept when a write happens. The cache never outlives the process,
/// which matches how the search data is used (stale restaurant lists are
/// acceptable for a day, not forever).
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RestaurantCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<Restaurant>>, CacheError> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > now => {
                    return Ok(Some(entry.restaurants.clone()))
                }
                Some(_) => {} // expired, evict below
                None => return Ok(None),
            }
        }

        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|e| e.expires_at <= now) {
            entries.remove(key);
        }
        Ok(None)
    }

    async fn set(
        &self,
        key: &str,
        restaurants: Vec<Restaurant>,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, e| e.expires_at > now);
        entries.insert(
            key.to_string(),
            CacheEntry {
                restaurants,
                expires_at: now + ttl,
            },
        );
        Ok(())
    }

    async fn clear(&self) -> Result<(), CacheError> {
        self.entries.write().await.clear();
        Ok(())
    }

    async fn entry_count(&self) -> Result<usize, CacheError> {
        let now = Instant::now();
        let entries = self.entries.read().await;
        Ok(entries.values().filter(|e| e.expires_at > now).count())
    }
}
