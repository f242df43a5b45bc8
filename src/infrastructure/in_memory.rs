use crate::domain::configuration::Configuration;
use crate::domain::ports::ConfigurationCache;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// How long a cached configuration stays valid.
pub const DEFAULT_CONFIGURATION_TTL: Duration = Duration::from_secs(5 * 60);

/// A thread-safe in-memory configuration cache with per-entry expiry.
///
/// Clones share the same underlying map.
#[derive(Clone)]
pub struct InMemoryConfigurationCache {
    entries: Arc<RwLock<HashMap<String, (Instant, String)>>>,
    ttl: Duration,
}

impl Default for InMemoryConfigurationCache {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_CONFIGURATION_TTL)
    }
}

impl InMemoryConfigurationCache {
    /// Creates an empty cache using `DEFAULT_CONFIGURATION_TTL`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache whose entries expire after `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::default(),
            ttl,
        }
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl ConfigurationCache for InMemoryConfigurationCache {
    async fn get_configuration(&self, cache_key: &str) -> Result<Option<String>> {
        {
            let entries = self.entries.read().await;
            match entries.get(cache_key) {
                Some((stored_at, json)) if stored_at.elapsed() < self.ttl => {
                    return Ok(Some(json.clone()));
                }
                Some(_) => {}
                None => return Ok(None),
            }
        }

        // Expired: evict under the write lock unless another writer refreshed it.
        let mut entries = self.entries.write().await;
        if entries
            .get(cache_key)
            .is_some_and(|(stored_at, _)| stored_at.elapsed() >= self.ttl)
        {
            entries.remove(cache_key);
        }
        Ok(None)
    }

    async fn save_configuration(&self, configuration: &Configuration, cache_key: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        let ttl = self.ttl;
        entries.retain(|_, (stored_at, _)| stored_at.elapsed() < ttl);
        entries.insert(
            cache_key.to_string(),
            (Instant::now(), configuration.to_json()),
        );
        Ok(())
    }
}
