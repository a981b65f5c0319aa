//! In-process cache implementation using moka.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use moka::future::Cache as MokaCache;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Bounded in-memory cache local to one process.
///
/// Used when caching is enabled but no `REDIS_URL` is configured. Capacity
/// eviction is handled by moka; per-entry expiry is checked on read so that
/// an explicit `ttl` can be shorter than the default.
///
/// The default TTL is also moka's global time-to-live, so an explicit `ttl`
/// longer than the default is capped at the default.
pub struct MemoryCache {
    cache: MokaCache<String, CacheEntry>,
    default_ttl: Duration,
}

impl MemoryCache {
    /// Creates a cache holding at most `max_entries` values.
    pub fn new(max_entries: u64, default_ttl: Duration) -> Self {
        debug!(
            "Using in-memory cache (max {} entries, TTL {}s)",
            max_entries,
            default_ttl.as_secs()
        );

        Self {
            cache: MokaCache::builder()
                .max_capacity(max_entries)
                .time_to_live(default_ttl)
                .build(),
            default_ttl,
        }
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        match self.cache.get(key).await {
            Some(entry) if entry.is_expired() => {
                self.cache.invalidate(key).await;
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> CacheResult<()> {
        let entry = CacheEntry {
            value: value.to_string(),
            expires_at: Instant::now() + ttl.unwrap_or(self.default_ttl),
        };
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.cache.invalidate(key).await;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
