//! Tag service implementation.

use crate::cache::{cache_keys, CacheAccess, CacheInterface};
use crate::tag_service::TagService;
use async_trait::async_trait;
use scribe_core::{
    unix_now, NewTag, PageRequest, ScribeError, ScribeResult, Tag, TagFilter, TagId, TagPatch,
};
use scribe_repository::TagStore;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

const ENTITY: &str = "tag";

/// Read-through cached [`TagService`].
#[derive(Component)]
#[shaku(interface = TagService)]
pub struct TagServiceImpl {
    #[shaku(inject)]
    tags: Arc<dyn TagStore>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
}

impl TagServiceImpl {
    /// Creates a new tag service.
    pub fn new(tags: Arc<dyn TagStore>, cache: Arc<dyn CacheInterface>) -> Self {
        Self { tags, cache }
    }

    fn cached(&self) -> CacheAccess<'_> {
        CacheAccess::new(self.cache.as_ref(), ENTITY)
    }
}

#[async_trait]
impl TagService for TagServiceImpl {
    async fn exists_by_id(&self, id: TagId) -> ScribeResult<bool> {
        self.tags.exists_by_id(id).await
    }

    async fn exists_by_name(&self, name: &str) -> ScribeResult<bool> {
        self.tags.exists_by_name(name).await
    }

    async fn get(&self, id: TagId) -> ScribeResult<Tag> {
        debug!("Getting tag: {}", id);

        if !self.tags.exists_by_id(id).await? {
            return Err(ScribeError::not_found("Tag", id));
        }

        let key = cache_keys::tag(id);
        if let Some(tag) = self.cached().load::<Tag>(&key).await {
            return Ok(tag);
        }

        let tag = self
            .tags
            .find_by_id(id)
            .await?
            .ok_or_else(|| ScribeError::not_found("Tag", id))?;

        self.cached().store(&key, &tag).await;
        Ok(tag)
    }

    async fn get_all(&self, filter: &TagFilter, page: PageRequest) -> ScribeResult<Vec<Tag>> {
        debug!("Listing tags: {:?}, page: {}, size: {}", filter, page.page, page.size);

        let key = cache_keys::tag_list(filter, page);
        if let Some(tags) = self.cached().load::<Vec<Tag>>(&key).await {
            return Ok(tags);
        }

        let tags = self.tags.find_by_filter(filter, page).await?;
        self.cached().store(&key, &tags).await;
        Ok(tags)
    }

    async fn count(&self, filter: &TagFilter) -> ScribeResult<u64> {
        self.tags.count_by_filter(filter).await
    }

    async fn add(&self, tag: NewTag) -> ScribeResult<Tag> {
        debug!("Creating tag: {}", tag.name);

        if self.tags.exists_by_name(&tag.name).await? {
            return Err(ScribeError::conflict(format!("Tag '{}' already exists", tag.name)));
        }

        let created = self.tags.insert(&tag, unix_now()).await?;

        info!("Tag created: {}", created.id);
        Ok(created)
    }

    async fn edit(&self, id: TagId, patch: TagPatch) -> ScribeResult<Tag> {
        debug!("Editing tag: {}", id);

        if !self.tags.exists_by_id(id).await? {
            return Err(ScribeError::not_found("Tag", id));
        }
        if let Some(name) = &patch.name {
            if let Some(other) = self.tags.find_by_name(name).await? {
                if other.id != id {
                    return Err(ScribeError::conflict(format!("Tag '{}' already exists", name)));
                }
            }
        }

        if !self.tags.update_fields(id, &patch, unix_now()).await? {
            return Err(ScribeError::not_found("Tag", id));
        }

        let tag = self
            .tags
            .find_by_id(id)
            .await?
            .ok_or_else(|| ScribeError::not_found("Tag", id))?;
        self.cached().store(&cache_keys::tag(id), &tag).await;

        info!("Tag updated: {}", id);
        Ok(tag)
    }

    async fn delete(&self, id: TagId) -> ScribeResult<()> {
        debug!("Deleting tag: {}", id);

        if !self.tags.soft_delete(id, unix_now()).await? {
            return Err(ScribeError::not_found("Tag", id));
        }
        self.cached().evict(&cache_keys::tag(id)).await;

        info!("Tag deleted: {}", id);
        Ok(())
    }

    async fn clean_all(&self) -> ScribeResult<u64> {
        let purged = self.tags.purge_soft_deleted().await?;
        info!("Purged {} soft-deleted tags", purged);
        Ok(purged)
    }
}

impl std::fmt::Debug for TagServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagServiceImpl").finish_non_exhaustive()
    }
}
