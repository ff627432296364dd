//! Cache access with failure isolation.
//!
//! Every cache error is logged at `warn`, counted, and turned into a miss or
//! a skipped write. Callers only ever see store errors.

use super::{cache_keys::ENTITY_TTL, CacheExt, CacheInterface};
use crate::metrics::CacheMetrics;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

/// A cache handle scoped to one entity type for logging and metrics.
#[derive(Clone, Copy)]
pub(crate) struct CacheAccess<'a> {
    cache: &'a dyn CacheInterface,
    entity: &'static str,
}

impl<'a> CacheAccess<'a> {
    pub(crate) fn new(cache: &'a dyn CacheInterface, entity: &'static str) -> Self {
        Self { cache, entity }
    }

    /// Returns the cached value under `key`, or `None` on miss or failure.
    pub(crate) async fn load<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned + Send,
    {
        if !self.cache.is_enabled() {
            return None;
        }

        match self.cache.exists(key).await {
            Ok(true) => {}
            Ok(false) => {
                CacheMetrics::miss(self.entity);
                return None;
            }
            Err(e) => {
                warn!(key, error = %e, "Cache lookup failed, falling back to store");
                CacheMetrics::error(self.entity);
                return None;
            }
        }

        match self.cache.get::<T>(key).await {
            Ok(Some(value)) => {
                debug!(key, "Cache hit");
                CacheMetrics::hit(self.entity);
                Some(value)
            }
            Ok(None) => {
                CacheMetrics::miss(self.entity);
                None
            }
            Err(e) => {
                warn!(key, error = %e, "Cache read failed, falling back to store");
                CacheMetrics::error(self.entity);
                None
            }
        }
    }

    /// Writes `value` under `key` with the entity TTL.
    pub(crate) async fn store<T>(&self, key: &str, value: &T)
    where
        T: Serialize + Send + Sync,
    {
        if let Err(e) = self.cache.set(key, value, ENTITY_TTL).await {
            warn!(key, error = %e, "Cache write failed");
            CacheMetrics::error(self.entity);
        }
    }

    /// Removes `key`.
    pub(crate) async fn evict(&self, key: &str) {
        if let Err(e) = self.cache.delete(key).await {
            warn!(key, error = %e, "Cache delete failed");
            CacheMetrics::error(self.entity);
        }
    }
}

impl std::fmt::Debug for CacheAccess<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheAccess")
            .field("entity", &self.entity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{InMemoryCache, MockCache};
    use scribe_core::ScribeError;

    #[tokio::test]
    async fn test_load_returns_stored_value() {
        let cache = InMemoryCache::new();
        let access = CacheAccess::new(&cache, "tag");
        access.store("TAG_1", &"go".to_string()).await;

        assert_eq!(access.load::<String>("TAG_1").await.as_deref(), Some("go"));
        access.evict("TAG_1").await;
        assert_eq!(access.load::<String>("TAG_1").await, None);
    }

    #[tokio::test]
    async fn test_undecodable_value_is_a_miss() {
        let cache = InMemoryCache::new();
        cache.set_raw("TAG_1", "not json", ENTITY_TTL).await.unwrap();
        let access = CacheAccess::new(&cache, "tag");

        assert_eq!(access.load::<String>("TAG_1").await, None);
    }

    #[tokio::test]
    async fn test_backend_failures_are_swallowed() {
        let mut mock = MockCache::new();
        mock.expect_is_enabled().return_const(true);
        mock.expect_exists()
            .returning(|_| Err(ScribeError::cache("connection refused")));
        mock.expect_set_raw()
            .times(1)
            .returning(|_, _, _| Err(ScribeError::cache("connection refused")));
        mock.expect_delete()
            .times(1)
            .returning(|_| Err(ScribeError::cache("connection refused")));
        mock.expect_get_raw().never();

        let access = CacheAccess::new(&mock, "article");
        assert_eq!(access.load::<String>("ARTICLE_1").await, None);
        access.store("ARTICLE_1", &"x").await;
        access.evict("ARTICLE_1").await;
    }

    #[tokio::test]
    async fn test_disabled_cache_skips_lookup() {
        let mut mock = MockCache::new();
        mock.expect_is_enabled().return_const(false);
        mock.expect_exists().never();

        let access = CacheAccess::new(&mock, "tag");
        assert_eq!(access.load::<String>("TAG_9").await, None);
    }
}
