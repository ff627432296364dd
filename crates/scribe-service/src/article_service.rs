//! Article service trait definition.

use async_trait::async_trait;
use scribe_core::{
    Article, ArticleFilter, ArticleId, ArticlePatch, Interface, NewArticle, PageRequest,
    ScribeResult,
};

/// Article use cases with a read-through cache in front of the store.
#[async_trait]
pub trait ArticleService: Interface + Send + Sync {
    /// Checks whether a live article exists. Never cached.
    async fn exists_by_id(&self, id: ArticleId) -> ScribeResult<bool>;

    /// Gets an article with its tag preloaded.
    async fn get(&self, id: ArticleId) -> ScribeResult<Article>;

    /// Gets one page of live articles matching the filter.
    async fn get_all(&self, filter: &ArticleFilter, page: PageRequest) -> ScribeResult<Vec<Article>>;

    /// Counts live articles matching the filter. Never cached.
    async fn count(&self, filter: &ArticleFilter) -> ScribeResult<u64>;

    /// Creates an article on an existing tag.
    async fn add(&self, article: NewArticle) -> ScribeResult<Article>;

    /// Applies a partial update and refreshes the cached snapshot.
    async fn edit(&self, id: ArticleId, patch: ArticlePatch) -> ScribeResult<Article>;

    /// Soft-deletes an article and drops its cached snapshot.
    async fn delete(&self, id: ArticleId) -> ScribeResult<()>;

    /// Purges every soft-deleted article. Returns the number of rows removed.
    async fn clean_all(&self) -> ScribeResult<u64>;
}
