//! Caching infrastructure for the service layer.
//!
//! Entries are JSON snapshots under keys from [`cache_keys`]. Three backends
//! implement [`CacheInterface`]: Redis, a bounded process-local LRU, and a
//! disabled no-op ([`RedisCacheService::disabled`]).

mod cache_interface;
pub mod cache_keys;
mod memory_cache;
mod read_through;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use memory_cache::InMemoryCache;
pub use redis_cache::{create_redis_pool, RedisCacheService};
pub(crate) use read_through::CacheAccess;

#[cfg(test)]
mockall::mock! {
    pub Cache {}

    #[async_trait::async_trait]
    impl CacheInterface for Cache {
        async fn get_raw(&self, key: &str) -> scribe_core::ScribeResult<Option<String>>;
        async fn set_raw(
            &self,
            key: &str,
            value: &str,
            ttl: std::time::Duration,
        ) -> scribe_core::ScribeResult<()>;
        async fn delete(&self, key: &str) -> scribe_core::ScribeResult<bool>;
        async fn exists(&self, key: &str) -> scribe_core::ScribeResult<bool>;
        fn is_enabled(&self) -> bool;
    }
}
