//! End-to-end flow through both services over the in-memory backends.

use scribe_core::{ArticleFilter, NewArticle, NewTag, PageRequest, PublishState, ScribeError};
use scribe_repository::{InMemoryArticleStore, InMemoryTagStore};
use scribe_service::{
    ArticleService, ArticleServiceImpl, CacheInterface, InMemoryCache, TagService, TagServiceImpl,
};
use std::sync::Arc;

struct Services {
    articles: ArticleServiceImpl,
    tags: TagServiceImpl,
}

fn services() -> Services {
    let tag_store = Arc::new(InMemoryTagStore::new());
    let article_store = Arc::new(InMemoryArticleStore::new(tag_store.clone()));
    let cache: Arc<dyn CacheInterface> = Arc::new(InMemoryCache::new());

    Services {
        articles: ArticleServiceImpl::new(article_store, tag_store.clone(), cache.clone()),
        tags: TagServiceImpl::new(tag_store, cache),
    }
}

#[tokio::test]
async fn test_tag_article_lifecycle() {
    let svc = services();

    let tag = svc
        .tags
        .add(NewTag {
            name: "go".to_string(),
            created_by: "alice".to_string(),
            state: PublishState::Published,
        })
        .await
        .expect("tag add failed");
    assert!(svc.tags.exists_by_name("go").await.unwrap());

    let article = svc
        .articles
        .add(NewArticle {
            tag_id: tag.id,
            title: "Goroutines".to_string(),
            desc: "An intro".to_string(),
            content: "...".to_string(),
            cover_image_url: String::new(),
            created_by: "alice".to_string(),
            state: PublishState::Published,
        })
        .await
        .expect("article add failed");

    let fetched = svc.articles.get(article.id).await.unwrap();
    let preloaded = fetched.tag.expect("tag should be preloaded");
    assert_eq!(preloaded.id, tag.id);
    assert_eq!(preloaded.name, "go");

    let by_tag = ArticleFilter::default().with_tag(tag.id);
    assert_eq!(svc.articles.count(&by_tag).await.unwrap(), 1);

    svc.articles.delete(article.id).await.unwrap();
    assert!(!svc.articles.exists_by_id(article.id).await.unwrap());
    assert!(matches!(
        svc.articles.get(article.id).await.unwrap_err(),
        ScribeError::NotFound { .. }
    ));

    assert_eq!(svc.articles.clean_all().await.unwrap(), 1);
    assert_eq!(svc.tags.clean_all().await.unwrap(), 0);
}

#[tokio::test]
async fn test_article_on_deleted_tag_is_rejected() {
    let svc = services();
    let tag = svc
        .tags
        .add(NewTag {
            name: "tmp".to_string(),
            created_by: "bob".to_string(),
            state: PublishState::Draft,
        })
        .await
        .unwrap();
    svc.tags.delete(tag.id).await.unwrap();

    let err = svc
        .articles
        .add(NewArticle {
            tag_id: tag.id,
            title: "t".to_string(),
            desc: "d".to_string(),
            content: "c".to_string(),
            cover_image_url: String::new(),
            created_by: "bob".to_string(),
            state: PublishState::Draft,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ScribeError::ReferentialViolation(_)));
    assert!(svc
        .articles
        .get_all(&ArticleFilter::default(), PageRequest::first())
        .await
        .unwrap()
        .is_empty());
}
