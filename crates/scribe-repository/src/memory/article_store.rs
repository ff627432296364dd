//! In-memory article store.

use super::page_window;
use crate::traits::{ArticleStore, TagStore};
use async_trait::async_trait;
use parking_lot::RwLock;
use scribe_core::{
    Article, ArticleFilter, ArticleId, ArticlePatch, NewArticle, PageRequest, ScribeResult,
    NOT_DELETED,
};
use shaku::Component;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Process-local [`ArticleStore`]. Tags are preloaded from the injected
/// [`TagStore`] at read time, so a soft-deleted tag preloads as `None`.
#[derive(Component)]
#[shaku(interface = ArticleStore)]
pub struct InMemoryArticleStore {
    #[shaku(inject)]
    tags: Arc<dyn TagStore>,
    #[shaku(default)]
    rows: RwLock<BTreeMap<ArticleId, Article>>,
    #[shaku(default)]
    last_id: AtomicI64,
}

impl InMemoryArticleStore {
    /// Creates an empty store that preloads tags from `tags`.
    #[must_use]
    pub fn new(tags: Arc<dyn TagStore>) -> Self {
        Self {
            tags,
            rows: RwLock::new(BTreeMap::new()),
            last_id: AtomicI64::new(0),
        }
    }

    /// Returns the number of rows, soft-deleted ones included.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.read().len()
    }

    fn matches(article: &Article, filter: &ArticleFilter) -> bool {
        article.deleted_on == NOT_DELETED
            && filter.tag_id.map_or(true, |id| article.tag_id == id)
            && filter.state.map_or(true, |state| article.state == state)
    }

    async fn preload(&self, mut article: Article) -> ScribeResult<Article> {
        article.tag = self.tags.find_by_id(article.tag_id).await?;
        Ok(article)
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn exists_by_id(&self, id: ArticleId) -> ScribeResult<bool> {
        Ok(self.rows.read().get(&id).is_some_and(Article::is_live))
    }

    async fn find_by_id(&self, id: ArticleId) -> ScribeResult<Option<Article>> {
        let row = self.rows.read().get(&id).filter(|a| a.is_live()).cloned();
        match row {
            Some(article) => Ok(Some(self.preload(article).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_filter(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> ScribeResult<Vec<Article>> {
        let window = {
            let rows = self.rows.read();
            page_window(rows.values().filter(|a| Self::matches(a, filter)).cloned(), page)
        };

        let mut articles = Vec::with_capacity(window.len());
        for article in window {
            articles.push(self.preload(article).await?);
        }
        Ok(articles)
    }

    async fn count_by_filter(&self, filter: &ArticleFilter) -> ScribeResult<u64> {
        let rows = self.rows.read();
        Ok(rows.values().filter(|a| Self::matches(a, filter)).count() as u64)
    }

    async fn insert(&self, article: &NewArticle, created_on: i64) -> ScribeResult<Article> {
        let id = ArticleId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        let stored = Article {
            id,
            tag_id: article.tag_id,
            tag: None,
            title: article.title.clone(),
            desc: article.desc.clone(),
            content: article.content.clone(),
            cover_image_url: article.cover_image_url.clone(),
            created_by: article.created_by.clone(),
            modified_by: String::new(),
            state: article.state,
            created_on,
            modified_on: created_on,
            deleted_on: NOT_DELETED,
        };
        self.rows.write().insert(id, stored.clone());
        self.preload(stored).await
    }

    async fn update_fields(
        &self,
        id: ArticleId,
        patch: &ArticlePatch,
        modified_on: i64,
    ) -> ScribeResult<bool> {
        let mut rows = self.rows.write();
        match rows.get_mut(&id).filter(|a| a.is_live()) {
            Some(article) => {
                patch.apply_to(article, modified_on);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn soft_delete(&self, id: ArticleId, deleted_on: i64) -> ScribeResult<bool> {
        let mut rows = self.rows.write();
        match rows.get_mut(&id).filter(|a| a.is_live()) {
            Some(article) => {
                article.deleted_on = deleted_on;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn purge_soft_deleted(&self) -> ScribeResult<u64> {
        let mut rows = self.rows.write();
        let before = rows.len();
        rows.retain(|_, a| a.is_live());
        Ok((before - rows.len()) as u64)
    }
}

impl std::fmt::Debug for InMemoryArticleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryArticleStore")
            .field("rows", &self.row_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryTagStore;
    use scribe_core::{NewTag, PublishState, TagId};

    async fn setup() -> (Arc<InMemoryTagStore>, InMemoryArticleStore, TagId) {
        let tags = Arc::new(InMemoryTagStore::new());
        let tag = tags
            .insert(
                &NewTag {
                    name: "go".to_string(),
                    created_by: "tester".to_string(),
                    state: PublishState::Published,
                },
                1,
            )
            .await
            .unwrap();
        let articles = InMemoryArticleStore::new(tags.clone());
        (tags, articles, tag.id)
    }

    fn new_article(tag_id: TagId, title: &str, state: PublishState) -> NewArticle {
        NewArticle {
            tag_id,
            title: title.to_string(),
            desc: "d".to_string(),
            content: "c".to_string(),
            cover_image_url: String::new(),
            created_by: "tester".to_string(),
            state,
        }
    }

    #[tokio::test]
    async fn test_find_by_id_preloads_tag() {
        let (_tags, store, tag_id) = setup().await;
        let article = store
            .insert(&new_article(tag_id, "t", PublishState::Published), 10)
            .await
            .unwrap();

        let found = store.find_by_id(article.id).await.unwrap().unwrap();
        assert_eq!(found.tag.as_ref().map(|t| t.name.as_str()), Some("go"));
        assert_eq!(found.created_on, 10);
    }

    #[tokio::test]
    async fn test_deleted_tag_preloads_as_none() {
        let (tags, store, tag_id) = setup().await;
        let article = store
            .insert(&new_article(tag_id, "t", PublishState::Published), 10)
            .await
            .unwrap();
        tags.soft_delete(tag_id, 11).await.unwrap();

        let found = store.find_by_id(article.id).await.unwrap().unwrap();
        assert!(found.tag.is_none());
        assert_eq!(found.tag_id, tag_id);
    }

    #[tokio::test]
    async fn test_filter_by_tag_and_state() {
        let (tags, store, go) = setup().await;
        let rust = tags
            .insert(
                &NewTag {
                    name: "rust".to_string(),
                    created_by: "tester".to_string(),
                    state: PublishState::Published,
                },
                1,
            )
            .await
            .unwrap()
            .id;
        store.insert(&new_article(go, "a", PublishState::Published), 1).await.unwrap();
        store.insert(&new_article(go, "b", PublishState::Draft), 1).await.unwrap();
        store.insert(&new_article(rust, "c", PublishState::Published), 1).await.unwrap();

        let go_filter = ArticleFilter::default().with_tag(go);
        assert_eq!(store.count_by_filter(&go_filter).await.unwrap(), 2);

        let published_go = go_filter.with_state(PublishState::Published);
        let rows = store.find_by_filter(&published_go, PageRequest::first()).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "a");

        assert_eq!(store.count_by_filter(&ArticleFilter::default()).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_soft_delete_then_purge() {
        let (_tags, store, tag_id) = setup().await;
        let article = store
            .insert(&new_article(tag_id, "t", PublishState::Published), 1)
            .await
            .unwrap();

        assert!(store.soft_delete(article.id, 2).await.unwrap());
        assert!(!store.exists_by_id(article.id).await.unwrap());
        assert!(!store.update_fields(article.id, &ArticlePatch::default(), 3).await.unwrap());
        assert_eq!(store.row_count(), 1);

        assert_eq!(store.purge_soft_deleted().await.unwrap(), 1);
        assert_eq!(store.row_count(), 0);
    }
}
