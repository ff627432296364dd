//! In-memory tag store.

use super::page_window;
use crate::traits::TagStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use scribe_core::{
    NewTag, PageRequest, ScribeResult, Tag, TagFilter, TagId, TagPatch, NOT_DELETED,
};
use shaku::Component;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// Process-local [`TagStore`]. Ids are assigned from 1 upwards.
#[derive(Component, Default)]
#[shaku(interface = TagStore)]
pub struct InMemoryTagStore {
    #[shaku(default)]
    rows: RwLock<BTreeMap<TagId, Tag>>,
    #[shaku(default)]
    last_id: AtomicI64,
}

impl InMemoryTagStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a tag regardless of its deletion state.
    #[must_use]
    pub fn get_any(&self, id: TagId) -> Option<Tag> {
        self.rows.read().get(&id).cloned()
    }

    fn matches(tag: &Tag, filter: &TagFilter) -> bool {
        tag.deleted_on == NOT_DELETED
            && filter.name.as_ref().map_or(true, |name| &tag.name == name)
            && filter.state.map_or(true, |state| tag.state == state)
    }
}

#[async_trait]
impl TagStore for InMemoryTagStore {
    async fn exists_by_id(&self, id: TagId) -> ScribeResult<bool> {
        Ok(self.rows.read().get(&id).is_some_and(Tag::is_live))
    }

    async fn exists_by_name(&self, name: &str) -> ScribeResult<bool> {
        Ok(self.rows.read().values().any(|t| t.is_live() && t.name == name))
    }

    async fn find_by_id(&self, id: TagId) -> ScribeResult<Option<Tag>> {
        Ok(self.rows.read().get(&id).filter(|t| t.is_live()).cloned())
    }

    async fn find_by_name(&self, name: &str) -> ScribeResult<Option<Tag>> {
        Ok(self
            .rows
            .read()
            .values()
            .find(|t| t.is_live() && t.name == name)
            .cloned())
    }

    async fn find_by_filter(&self, filter: &TagFilter, page: PageRequest) -> ScribeResult<Vec<Tag>> {
        let rows = self.rows.read();
        Ok(page_window(
            rows.values().filter(|t| Self::matches(t, filter)).cloned(),
            page,
        ))
    }

    async fn count_by_filter(&self, filter: &TagFilter) -> ScribeResult<u64> {
        let rows = self.rows.read();
        Ok(rows.values().filter(|t| Self::matches(t, filter)).count() as u64)
    }

    async fn insert(&self, tag: &NewTag, created_on: i64) -> ScribeResult<Tag> {
        let id = TagId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        let stored = Tag {
            id,
            name: tag.name.clone(),
            created_by: tag.created_by.clone(),
            modified_by: String::new(),
            state: tag.state,
            created_on,
            modified_on: created_on,
            deleted_on: NOT_DELETED,
        };
        self.rows.write().insert(id, stored.clone());
        Ok(stored)
    }

    async fn update_fields(&self, id: TagId, patch: &TagPatch, modified_on: i64) -> ScribeResult<bool> {
        let mut rows = self.rows.write();
        match rows.get_mut(&id).filter(|t| t.is_live()) {
            Some(tag) => {
                patch.apply_to(tag, modified_on);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn soft_delete(&self, id: TagId, deleted_on: i64) -> ScribeResult<bool> {
        let mut rows = self.rows.write();
        match rows.get_mut(&id).filter(|t| t.is_live()) {
            Some(tag) => {
                tag.deleted_on = deleted_on;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn purge_soft_deleted(&self) -> ScribeResult<u64> {
        let mut rows = self.rows.write();
        let before = rows.len();
        rows.retain(|_, t| t.is_live());
        Ok((before - rows.len()) as u64)
    }
}

impl std::fmt::Debug for InMemoryTagStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTagStore")
            .field("rows", &self.rows.read().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::PublishState;

    fn new_tag(name: &str, state: PublishState) -> NewTag {
        NewTag {
            name: name.to_string(),
            created_by: "tester".to_string(),
            state,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids_and_timestamps() {
        let store = InMemoryTagStore::new();
        let first = store.insert(&new_tag("go", PublishState::Published), 100).await.unwrap();
        let second = store.insert(&new_tag("rust", PublishState::Draft), 101).await.unwrap();

        assert_eq!(first.id, TagId::new(1));
        assert_eq!(second.id, TagId::new(2));
        assert_eq!(first.created_on, 100);
        assert_eq!(first.modified_on, 100);
        assert!(first.is_live());
    }

    #[tokio::test]
    async fn test_soft_deleted_tags_are_invisible() {
        let store = InMemoryTagStore::new();
        let tag = store.insert(&new_tag("go", PublishState::Published), 1).await.unwrap();

        assert!(store.soft_delete(tag.id, 5).await.unwrap());
        assert!(!store.exists_by_id(tag.id).await.unwrap());
        assert!(!store.exists_by_name("go").await.unwrap());
        assert!(store.find_by_id(tag.id).await.unwrap().is_none());
        assert_eq!(store.count_by_filter(&TagFilter::default()).await.unwrap(), 0);
        assert!(!store.soft_delete(tag.id, 6).await.unwrap());
        assert_eq!(store.get_any(tag.id).unwrap().deleted_on, 5);
    }

    #[tokio::test]
    async fn test_filter_and_pagination() {
        let store = InMemoryTagStore::new();
        for (name, state) in [
            ("a", PublishState::Published),
            ("b", PublishState::Draft),
            ("c", PublishState::Published),
            ("d", PublishState::Published),
        ] {
            store.insert(&new_tag(name, state), 1).await.unwrap();
        }

        let published = TagFilter::default().with_state(PublishState::Published);
        assert_eq!(store.count_by_filter(&published).await.unwrap(), 3);

        let page = store.find_by_filter(&published, PageRequest::new(1, 2)).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name, "d");

        let by_name = TagFilter::default().with_name("b");
        assert_eq!(store.find_by_filter(&by_name, PageRequest::first()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_fields_only_touches_patch() {
        let store = InMemoryTagStore::new();
        let tag = store.insert(&new_tag("go", PublishState::Published), 1).await.unwrap();
        let patch = TagPatch {
            name: Some("golang".to_string()),
            ..TagPatch::default()
        };

        assert!(store.update_fields(tag.id, &patch, 9).await.unwrap());
        let updated = store.find_by_id(tag.id).await.unwrap().unwrap();
        assert_eq!(updated.name, "golang");
        assert_eq!(updated.state, PublishState::Published);
        assert_eq!(updated.modified_on, 9);
        assert!(!store.update_fields(TagId::new(99), &patch, 9).await.unwrap());
    }

    #[tokio::test]
    async fn test_purge_removes_only_soft_deleted() {
        let store = InMemoryTagStore::new();
        let keep = store.insert(&new_tag("keep", PublishState::Published), 1).await.unwrap();
        let gone = store.insert(&new_tag("drop", PublishState::Published), 1).await.unwrap();
        store.soft_delete(gone.id, 2).await.unwrap();

        assert_eq!(store.purge_soft_deleted().await.unwrap(), 1);
        assert!(store.get_any(gone.id).is_none());
        assert!(store.exists_by_id(keep.id).await.unwrap());
        assert_eq!(store.purge_soft_deleted().await.unwrap(), 0);
    }
}
