//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use scribe_core::{Interface, ScribeResult};
use std::time::Duration;

/// Key-value cache holding JSON snapshots with a per-entry TTL.
///
/// Implementations report backend failures as [`scribe_core::ScribeError::Cache`].
/// Values are JSON strings so the trait stays dyn-compatible; typed access
/// goes through [`CacheExt`].
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Returns the raw JSON stored under `key`, or `None` if absent or expired.
    async fn get_raw(&self, key: &str) -> ScribeResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous entry and its TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> ScribeResult<()>;

    /// Removes `key`. Returns `true` if an entry was removed.
    async fn delete(&self, key: &str) -> ScribeResult<bool>;

    /// Checks whether a live entry exists under `key`.
    async fn exists(&self, key: &str) -> ScribeResult<bool>;

    /// Whether this cache stores anything at all.
    fn is_enabled(&self) -> bool;
}

/// Typed helpers over [`CacheInterface`].
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> ScribeResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> ScribeResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }
}

impl<T: CacheInterface + ?Sized> CacheExt for T {}
