//! Tag service trait definition.

use async_trait::async_trait;
use scribe_core::{Interface, NewTag, PageRequest, ScribeResult, Tag, TagFilter, TagId, TagPatch};

/// Tag use cases with a read-through cache in front of the store.
#[async_trait]
pub trait TagService: Interface + Send + Sync {
    /// Checks whether a live tag exists. Never cached.
    async fn exists_by_id(&self, id: TagId) -> ScribeResult<bool>;

    /// Checks whether a live tag uses this name. Never cached.
    async fn exists_by_name(&self, name: &str) -> ScribeResult<bool>;

    /// Gets a tag.
    async fn get(&self, id: TagId) -> ScribeResult<Tag>;

    /// Gets one page of live tags matching the filter.
    async fn get_all(&self, filter: &TagFilter, page: PageRequest) -> ScribeResult<Vec<Tag>>;

    /// Counts live tags matching the filter. Never cached.
    async fn count(&self, filter: &TagFilter) -> ScribeResult<u64>;

    /// Creates a tag with a name unused by any live tag.
    async fn add(&self, tag: NewTag) -> ScribeResult<Tag>;

    /// Applies a partial update and refreshes the cached snapshot.
    async fn edit(&self, id: TagId, patch: TagPatch) -> ScribeResult<Tag>;

    /// Soft-deletes a tag and drops its cached snapshot.
    async fn delete(&self, id: TagId) -> ScribeResult<()>;

    /// Purges every soft-deleted tag. Returns the number of rows removed.
    async fn clean_all(&self) -> ScribeResult<u64>;
}
