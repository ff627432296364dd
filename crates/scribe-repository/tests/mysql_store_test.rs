//! Integration tests for the MySQL stores.
//!
//! These run against a real MySQL server started with testcontainers and
//! are ignored unless Docker is available (`cargo test -- --ignored`).

mod common;

use common::TestDatabase;
use scribe_core::{
    ArticleFilter, ArticlePatch, NewArticle, NewTag, PageRequest, PublishState, TagFilter,
    TagId, TagPatch,
};
use scribe_repository::{ArticleStore, MySqlArticleStore, MySqlTagStore, TagStore};

fn new_tag(name: &str) -> NewTag {
    NewTag {
        name: name.to_string(),
        created_by: "tester".to_string(),
        state: PublishState::Published,
    }
}

fn new_article(tag_id: TagId, title: &str) -> NewArticle {
    NewArticle {
        tag_id,
        title: title.to_string(),
        desc: "summary".to_string(),
        content: "body".to_string(),
        cover_image_url: "https://img.example.com/a.png".to_string(),
        created_by: "tester".to_string(),
        state: PublishState::Published,
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_tag_insert_and_lookup() {
    let db = TestDatabase::new().await;
    let tags = MySqlTagStore::new(db.pool());

    let tag = tags.insert(&new_tag("rust"), 100).await.expect("insert failed");
    assert!(tag.id.is_valid());
    assert_eq!(tag.created_on, 100);
    assert_eq!(tag.deleted_on, 0);

    assert!(tags.exists_by_id(tag.id).await.unwrap());
    assert!(tags.exists_by_name("rust").await.unwrap());
    let by_name = tags.find_by_name("rust").await.unwrap().expect("tag not found");
    assert_eq!(by_name.id, tag.id);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_tag_update_and_soft_delete() {
    let db = TestDatabase::new().await;
    let tags = MySqlTagStore::new(db.pool());
    let tag = tags.insert(&new_tag("draft"), 1).await.unwrap();

    let patch = TagPatch {
        name: Some("final".to_string()),
        modified_by: Some("editor".to_string()),
        state: None,
    };
    assert!(tags.update_fields(tag.id, &patch, 2).await.unwrap());

    let updated = tags.find_by_id(tag.id).await.unwrap().unwrap();
    assert_eq!(updated.name, "final");
    assert_eq!(updated.modified_by, "editor");
    assert_eq!(updated.modified_on, 2);

    assert!(tags.soft_delete(tag.id, 3).await.unwrap());
    assert!(tags.find_by_id(tag.id).await.unwrap().is_none());
    assert!(!tags.soft_delete(tag.id, 4).await.unwrap());
    assert_eq!(tags.purge_soft_deleted().await.unwrap(), 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_tag_filter_and_pagination() {
    let db = TestDatabase::new().await;
    let tags = MySqlTagStore::new(db.pool());
    for name in ["a", "b", "c"] {
        tags.insert(&new_tag(name), 1).await.unwrap();
    }

    let all = TagFilter::default();
    assert_eq!(tags.count_by_filter(&all).await.unwrap(), 3);
    let second = tags.find_by_filter(&all, PageRequest::new(1, 2)).await.unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "c");

    let named = TagFilter::default().with_name("b");
    assert_eq!(tags.count_by_filter(&named).await.unwrap(), 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_article_preloads_live_tag_only() {
    let db = TestDatabase::new().await;
    let tags = MySqlTagStore::new(db.pool());
    let articles = MySqlArticleStore::new(db.pool());

    let tag = tags.insert(&new_tag("go"), 1).await.unwrap();
    let article = articles.insert(&new_article(tag.id, "hello"), 5).await.unwrap();
    assert_eq!(article.tag.as_ref().map(|t| t.name.as_str()), Some("go"));

    tags.soft_delete(tag.id, 6).await.unwrap();
    let reloaded = articles.find_by_id(article.id).await.unwrap().unwrap();
    assert!(reloaded.tag.is_none());
    assert_eq!(reloaded.tag_id, tag.id);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_article_filter_update_delete_purge() {
    let db = TestDatabase::new().await;
    let tags = MySqlTagStore::new(db.pool());
    let articles = MySqlArticleStore::new(db.pool());

    let go = tags.insert(&new_tag("go"), 1).await.unwrap();
    let rust = tags.insert(&new_tag("rust"), 1).await.unwrap();
    let first = articles.insert(&new_article(go.id, "one"), 1).await.unwrap();
    articles.insert(&new_article(rust.id, "two"), 1).await.unwrap();

    let by_go = ArticleFilter::default().with_tag(go.id);
    assert_eq!(articles.count_by_filter(&by_go).await.unwrap(), 1);

    let patch = ArticlePatch {
        title: Some("uno".to_string()),
        state: Some(PublishState::Draft),
        ..ArticlePatch::default()
    };
    assert!(articles.update_fields(first.id, &patch, 9).await.unwrap());
    let drafts = ArticleFilter::default().with_state(PublishState::Draft);
    let rows = articles.find_by_filter(&drafts, PageRequest::first()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "uno");

    assert!(articles.soft_delete(first.id, 10).await.unwrap());
    assert!(!articles.exists_by_id(first.id).await.unwrap());
    assert_eq!(articles.count_by_filter(&ArticleFilter::default()).await.unwrap(), 1);
    assert_eq!(articles.purge_soft_deleted().await.unwrap(), 1);
}
