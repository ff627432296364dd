//! Process-local LRU cache with TTL expiry.

use super::CacheInterface;
use async_trait::async_trait;
use lru::LruCache;
use parking_lot::Mutex;
use scribe_core::ScribeResult;
use shaku::Component;
use std::num::NonZeroUsize;
use std::time::Duration;
use tokio::time::Instant;

/// In-memory [`CacheInterface`] bounded by an LRU, with lazy expiry.
///
/// Expiry is measured on the Tokio clock, so paused-time tests can advance
/// past a TTL without sleeping.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct InMemoryCache {
    #[shaku(default = Mutex::new(LruCache::new(InMemoryCache::DEFAULT_CAPACITY)))]
    entries: Mutex<LruCache<String, Entry>>,
}

struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

impl InMemoryCache {
    /// Entry limit used when no capacity is configured.
    pub const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::MIN.saturating_add(9_999);

    /// Creates an empty cache holding at most [`Self::DEFAULT_CAPACITY`] entries.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty cache holding at most `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Number of stored entries, expired ones included until next touched.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Maximum number of entries kept.
    #[must_use]
    pub fn capacity(&self) -> NonZeroUsize {
        self.entries.lock().cap()
    }

    fn live_value(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        let entry = entries.get(key)?;
        if entry.is_live(now) {
            return Some(entry.value.clone());
        }
        entries.pop(key);
        None
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheInterface for InMemoryCache {
    async fn get_raw(&self, key: &str) -> ScribeResult<Option<String>> {
        Ok(self.live_value(key))
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> ScribeResult<()> {
        let entry = Entry {
            value: value.to_string(),
            expires_at: Instant::now() + ttl,
        };
        self.entries.lock().put(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> ScribeResult<bool> {
        let removed = self.entries.lock().pop(key);
        Ok(removed.is_some_and(|entry| entry.is_live(Instant::now())))
    }

    async fn exists(&self, key: &str) -> ScribeResult<bool> {
        Ok(self.live_value(key).is_some())
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

impl std::fmt::Debug for InMemoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCache")
            .field("entries", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
