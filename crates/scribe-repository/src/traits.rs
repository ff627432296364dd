//! Store trait definitions.
//!
//! Every read except [`ArticleStore::purge_soft_deleted`] and
//! [`TagStore::purge_soft_deleted`] ignores rows whose `deleted_on` is
//! non-zero. Timestamps are supplied by the caller.

use async_trait::async_trait;
use scribe_core::{
    Article, ArticleFilter, ArticleId, ArticlePatch, Interface, NewArticle, NewTag, PageRequest,
    ScribeResult, Tag, TagFilter, TagId, TagPatch,
};

/// Article persistence.
#[async_trait]
pub trait ArticleStore: Interface + Send + Sync {
    /// Checks whether a live article with this id exists.
    async fn exists_by_id(&self, id: ArticleId) -> ScribeResult<bool>;

    /// Loads a live article with its tag preloaded.
    async fn find_by_id(&self, id: ArticleId) -> ScribeResult<Option<Article>>;

    /// Loads one page of live articles matching the filter, ordered by id.
    async fn find_by_filter(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> ScribeResult<Vec<Article>>;

    /// Counts live articles matching the filter.
    async fn count_by_filter(&self, filter: &ArticleFilter) -> ScribeResult<u64>;

    /// Inserts an article stamped with `created_on` and returns the stored row.
    async fn insert(&self, article: &NewArticle, created_on: i64) -> ScribeResult<Article>;

    /// Writes the provided patch fields. Returns false if no live row matched.
    async fn update_fields(
        &self,
        id: ArticleId,
        patch: &ArticlePatch,
        modified_on: i64,
    ) -> ScribeResult<bool>;

    /// Marks a live article deleted. Returns false if no live row matched.
    async fn soft_delete(&self, id: ArticleId, deleted_on: i64) -> ScribeResult<bool>;

    /// Physically removes every soft-deleted article. Returns the row count.
    async fn purge_soft_deleted(&self) -> ScribeResult<u64>;
}

/// Tag persistence.
#[async_trait]
pub trait TagStore: Interface + Send + Sync {
    /// Checks whether a live tag with this id exists.
    async fn exists_by_id(&self, id: TagId) -> ScribeResult<bool>;

    /// Checks whether a live tag with this exact name exists.
    async fn exists_by_name(&self, name: &str) -> ScribeResult<bool>;

    /// Loads a live tag.
    async fn find_by_id(&self, id: TagId) -> ScribeResult<Option<Tag>>;

    /// Loads the live tag with this exact name.
    async fn find_by_name(&self, name: &str) -> ScribeResult<Option<Tag>>;

    /// Loads one page of live tags matching the filter, ordered by id.
    async fn find_by_filter(&self, filter: &TagFilter, page: PageRequest) -> ScribeResult<Vec<Tag>>;

    /// Counts live tags matching the filter.
    async fn count_by_filter(&self, filter: &TagFilter) -> ScribeResult<u64>;

    /// Inserts a tag stamped with `created_on` and returns the stored row.
    async fn insert(&self, tag: &NewTag, created_on: i64) -> ScribeResult<Tag>;

    /// Writes the provided patch fields. Returns false if no live row matched.
    async fn update_fields(&self, id: TagId, patch: &TagPatch, modified_on: i64) -> ScribeResult<bool>;

    /// Marks a live tag deleted. Returns false if no live row matched.
    async fn soft_delete(&self, id: TagId, deleted_on: i64) -> ScribeResult<bool>;

    /// Physically removes every soft-deleted tag. Returns the row count.
    async fn purge_soft_deleted(&self) -> ScribeResult<u64>;
}
