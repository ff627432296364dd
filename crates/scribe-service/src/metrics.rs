//! Prometheus metrics for the read-through cache.

use metrics::{counter, describe_counter};

/// Metric names for the cache layer.
pub mod names {
    /// Reads served from the cache.
    pub const CACHE_HITS_TOTAL: &str = "scribe_cache_hits_total";
    /// Reads that fell through to the store.
    pub const CACHE_MISSES_TOTAL: &str = "scribe_cache_misses_total";
    /// Cache backend failures swallowed by the services.
    pub const CACHE_ERRORS_TOTAL: &str = "scribe_cache_errors_total";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(
        names::CACHE_HITS_TOTAL,
        "Total number of reads served from the cache"
    );
    describe_counter!(
        names::CACHE_MISSES_TOTAL,
        "Total number of cache misses that fell through to the store"
    );
    describe_counter!(
        names::CACHE_ERRORS_TOTAL,
        "Total number of cache backend failures"
    );
}

/// Cache metrics recorder, labelled by entity type.
#[derive(Clone)]
pub struct CacheMetrics;

impl CacheMetrics {
    /// Record a cache hit.
    pub fn hit(entity: &'static str) {
        counter!(names::CACHE_HITS_TOTAL, "entity" => entity).increment(1);
    }

    /// Record a cache miss.
    pub fn miss(entity: &'static str) {
        counter!(names::CACHE_MISSES_TOTAL, "entity" => entity).increment(1);
    }

    /// Record a swallowed cache failure.
    pub fn error(entity: &'static str) {
        counter!(names::CACHE_ERRORS_TOTAL, "entity" => entity).increment(1);
    }
}
