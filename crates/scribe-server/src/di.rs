//! Dependency injection.
//!
//! The in-memory store is assembled as a Shaku module. The MySQL store needs
//! an async pool, so it is wired with explicit constructors. Both paths share
//! the cache selected by `cache.backend`.

use scribe_config::{AppConfig, CacheBackend, CacheConfig, DatabaseConfig, RedisConfig, StoreBackend};
use scribe_repository::{
    create_pool, ArticleStore, DatabasePoolInterface, InMemoryArticleStore, InMemoryTagStore,
    MySqlArticleStore, MySqlTagStore, TagStore,
};
use scribe_rest::AppState;
use scribe_core::ScribeResult;
use scribe_service::{
    create_redis_pool, ArticleService, ArticleServiceImpl, CacheInterface, InMemoryCache,
    RedisCacheService, TagService, TagServiceImpl,
};
use shaku::{module, HasComponent};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{info, warn};

// In-memory deployment: process-local tables, cache overridable at build time.
module! {
    pub MemoryModule {
        components = [
            InMemoryTagStore,
            InMemoryArticleStore,
            InMemoryCache,
            ArticleServiceImpl,
            TagServiceImpl,
        ],
        providers = [],
    }
}

/// Services resolved for one server process.
pub struct AppContainer {
    article_service: Arc<dyn ArticleService>,
    tag_service: Arc<dyn TagService>,
    database: Option<Arc<dyn DatabasePoolInterface>>,
}

impl AppContainer {
    /// Builds the store and cache selected by `config`.
    pub async fn build(config: &AppConfig) -> ScribeResult<Self> {
        let cache = build_cache(&config.cache, &config.redis).await;
        match config.database.backend {
            StoreBackend::Memory => Ok(Self::in_memory(cache)),
            StoreBackend::Mysql => Self::mysql(&config.database, cache).await,
        }
    }

    /// Builds the in-memory module with `cache` in front of it.
    #[must_use]
    pub fn in_memory(cache: Box<dyn CacheInterface>) -> Self {
        info!("Using in-memory store");
        let module = MemoryModule::builder()
            .with_component_override::<dyn CacheInterface>(cache)
            .build();

        Self {
            article_service: module.resolve(),
            tag_service: module.resolve(),
            database: None,
        }
    }

    async fn mysql(config: &DatabaseConfig, cache: Box<dyn CacheInterface>) -> ScribeResult<Self> {
        let pool: Arc<dyn DatabasePoolInterface> = create_pool(config).await?;
        if config.run_migrations {
            pool.run_migrations().await?;
        }

        let tags: Arc<dyn TagStore> = Arc::new(MySqlTagStore::new(pool.clone()));
        let articles: Arc<dyn ArticleStore> = Arc::new(MySqlArticleStore::new(pool.clone()));
        let cache: Arc<dyn CacheInterface> = Arc::from(cache);

        Ok(Self {
            article_service: Arc::new(ArticleServiceImpl::new(articles, tags.clone(), cache.clone())),
            tag_service: Arc::new(TagServiceImpl::new(tags, cache)),
            database: Some(pool),
        })
    }

    /// Returns the article service.
    #[must_use]
    pub fn article_service(&self) -> Arc<dyn ArticleService> {
        self.article_service.clone()
    }

    /// Returns the tag service.
    #[must_use]
    pub fn tag_service(&self) -> Arc<dyn TagService> {
        self.tag_service.clone()
    }

    /// Builds the HTTP state for these services.
    #[must_use]
    pub fn app_state(&self, page_size: u64) -> AppState {
        AppState::new(self.article_service(), self.tag_service(), page_size)
    }

    /// Closes the database pool, if any.
    pub async fn shutdown(&self) {
        if let Some(database) = &self.database {
            database.close().await;
        }
    }
}

/// Builds the cache selected by `cache.backend`.
///
/// An unreachable Redis at startup leaves the server running with the cache
/// disabled.
pub async fn build_cache(cache: &CacheConfig, redis: &RedisConfig) -> Box<dyn CacheInterface> {
    match cache.backend {
        CacheBackend::Redis => match create_redis_pool(redis).await {
            Ok(pool) => Box::new(RedisCacheService::new(pool)),
            Err(e) => {
                warn!("Redis unavailable, continuing without cache: {}", e);
                Box::new(RedisCacheService::disabled())
            }
        },
        CacheBackend::Memory => {
            let capacity = NonZeroUsize::new(cache.memory_capacity)
                .unwrap_or(InMemoryCache::DEFAULT_CAPACITY);
            info!("Using in-memory cache with capacity {}", capacity);
            Box::new(InMemoryCache::with_capacity(capacity))
        }
        CacheBackend::Disabled => {
            info!("Cache disabled by configuration");
            Box::new(RedisCacheService::disabled())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::{NewArticle, NewTag, PublishState, ScribeError};
    use std::time::Duration;

    #[test]
    fn test_module_provides_services() {
        fn _assert_has_article_service<T: HasComponent<dyn ArticleService>>() {}
        fn _assert_has_tag_service<T: HasComponent<dyn TagService>>() {}
        fn _assert_has_cache<T: HasComponent<dyn CacheInterface>>() {}
        fn _assert_has_stores<T: HasComponent<dyn ArticleStore> + HasComponent<dyn TagStore>>() {}

        _assert_has_article_service::<MemoryModule>();
        _assert_has_tag_service::<MemoryModule>();
        _assert_has_cache::<MemoryModule>();
        _assert_has_stores::<MemoryModule>();
    }

    fn cache_config(backend: CacheBackend, memory_capacity: usize) -> CacheConfig {
        CacheConfig {
            backend,
            memory_capacity,
        }
    }

    #[tokio::test]
    async fn test_disabled_backend_builds_noop_cache() {
        let config = cache_config(CacheBackend::Disabled, 10);
        let cache = build_cache(&config, &RedisConfig::default()).await;
        assert!(!cache.is_enabled());

        let config = cache_config(CacheBackend::Memory, 10);
        let cache = build_cache(&config, &RedisConfig::default()).await;
        assert!(cache.is_enabled());
    }

    #[tokio::test]
    async fn test_memory_backend_honours_capacity() {
        let config = cache_config(CacheBackend::Memory, 3);
        let cache = build_cache(&config, &RedisConfig::default()).await;

        for id in 1..=5 {
            let key = format!("TAG_{id}");
            cache.set_raw(&key, "\"x\"", Duration::from_secs(60)).await.unwrap();
        }

        let mut live = 0;
        for id in 1..=5 {
            if cache.exists(&format!("TAG_{id}")).await.unwrap() {
                live += 1;
            }
        }
        assert_eq!(live, 3);
        assert!(!cache.exists("TAG_1").await.unwrap());
    }

    #[tokio::test]
    async fn test_memory_module_shares_stores_between_services() {
        let container = AppContainer::in_memory(Box::new(InMemoryCache::new()));
        let tags = container.tag_service();
        let articles = container.article_service();

        let tag = tags
            .add(NewTag {
                name: "go".to_string(),
                created_by: "tester".to_string(),
                state: PublishState::Published,
            })
            .await
            .unwrap();

        let article = articles
            .add(NewArticle {
                tag_id: tag.id,
                title: "hello".to_string(),
                desc: "d".to_string(),
                content: "c".to_string(),
                cover_image_url: String::new(),
                created_by: "tester".to_string(),
                state: PublishState::Published,
            })
            .await
            .unwrap();
        assert_eq!(articles.get(article.id).await.unwrap().tag.unwrap().name, "go");

        tags.delete(tag.id).await.unwrap();
        let err = articles
            .add(NewArticle {
                tag_id: tag.id,
                title: "late".to_string(),
                desc: "d".to_string(),
                content: "c".to_string(),
                cover_image_url: String::new(),
                created_by: "tester".to_string(),
                state: PublishState::Draft,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ScribeError::ReferentialViolation(_)));
    }
}
