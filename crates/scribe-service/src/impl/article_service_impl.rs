//! Article service implementation.

use crate::article_service::ArticleService;
use crate::cache::{cache_keys, CacheAccess, CacheInterface};
use async_trait::async_trait;
use scribe_core::{
    unix_now, Article, ArticleFilter, ArticleId, ArticlePatch, NewArticle, PageRequest,
    ScribeError, ScribeResult, TagId,
};
use scribe_repository::{ArticleStore, TagStore};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

const ENTITY: &str = "article";

/// Read-through cached [`ArticleService`].
#[derive(Component)]
#[shaku(interface = ArticleService)]
pub struct ArticleServiceImpl {
    #[shaku(inject)]
    articles: Arc<dyn ArticleStore>,
    #[shaku(inject)]
    tags: Arc<dyn TagStore>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
}

impl ArticleServiceImpl {
    /// Creates a new article service.
    pub fn new(
        articles: Arc<dyn ArticleStore>,
        tags: Arc<dyn TagStore>,
        cache: Arc<dyn CacheInterface>,
    ) -> Self {
        Self {
            articles,
            tags,
            cache,
        }
    }

    fn cached(&self) -> CacheAccess<'_> {
        CacheAccess::new(self.cache.as_ref(), ENTITY)
    }

    async fn ensure_tag(&self, tag_id: TagId) -> ScribeResult<()> {
        if self.tags.exists_by_id(tag_id).await? {
            Ok(())
        } else {
            Err(ScribeError::referential(format!("Tag {} does not exist", tag_id)))
        }
    }
}

#[async_trait]
impl ArticleService for ArticleServiceImpl {
    async fn exists_by_id(&self, id: ArticleId) -> ScribeResult<bool> {
        self.articles.exists_by_id(id).await
    }

    async fn get(&self, id: ArticleId) -> ScribeResult<Article> {
        debug!("Getting article: {}", id);

        if !self.articles.exists_by_id(id).await? {
            return Err(ScribeError::not_found("Article", id));
        }

        let key = cache_keys::article(id);
        if let Some(article) = self.cached().load::<Article>(&key).await {
            return Ok(article);
        }

        let article = self
            .articles
            .find_by_id(id)
            .await?
            .ok_or_else(|| ScribeError::not_found("Article", id))?;

        self.cached().store(&key, &article).await;
        Ok(article)
    }

    async fn get_all(&self, filter: &ArticleFilter, page: PageRequest) -> ScribeResult<Vec<Article>> {
        debug!("Listing articles: {:?}, page: {}, size: {}", filter, page.page, page.size);

        let key = cache_keys::article_list(filter, page);
        if let Some(articles) = self.cached().load::<Vec<Article>>(&key).await {
            return Ok(articles);
        }

        let articles = self.articles.find_by_filter(filter, page).await?;
        self.cached().store(&key, &articles).await;
        Ok(articles)
    }

    async fn count(&self, filter: &ArticleFilter) -> ScribeResult<u64> {
        self.articles.count_by_filter(filter).await
    }

    async fn add(&self, article: NewArticle) -> ScribeResult<Article> {
        debug!("Creating article: {}", article.title);

        self.ensure_tag(article.tag_id).await?;
        let created = self.articles.insert(&article, unix_now()).await?;

        info!("Article created: {}", created.id);
        Ok(created)
    }

    async fn edit(&self, id: ArticleId, patch: ArticlePatch) -> ScribeResult<Article> {
        debug!("Editing article: {}", id);

        if !self.articles.exists_by_id(id).await? {
            return Err(ScribeError::not_found("Article", id));
        }
        if let Some(tag_id) = patch.tag_id {
            self.ensure_tag(tag_id).await?;
        }

        if !self.articles.update_fields(id, &patch, unix_now()).await? {
            return Err(ScribeError::not_found("Article", id));
        }

        let article = self
            .articles
            .find_by_id(id)
            .await?
            .ok_or_else(|| ScribeError::not_found("Article", id))?;
        self.cached().store(&cache_keys::article(id), &article).await;

        info!("Article updated: {}", id);
        Ok(article)
    }

    async fn delete(&self, id: ArticleId) -> ScribeResult<()> {
        debug!("Deleting article: {}", id);

        if !self.articles.soft_delete(id, unix_now()).await? {
            return Err(ScribeError::not_found("Article", id));
        }
        self.cached().evict(&cache_keys::article(id)).await;

        info!("Article deleted: {}", id);
        Ok(())
    }

    async fn clean_all(&self) -> ScribeResult<u64> {
        let purged = self.articles.purge_soft_deleted().await?;
        info!("Purged {} soft-deleted articles", purged);
        Ok(purged)
    }
}

impl std::fmt::Debug for ArticleServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticleServiceImpl").finish_non_exhaustive()
    }
}
