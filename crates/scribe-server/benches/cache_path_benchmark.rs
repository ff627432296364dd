//! Cache path benchmark.
//!
//! Measures the pieces every read pays for: key derivation, snapshot
//! serialization, and a full read-through `get` against the in-memory store
//! and cache (miss then hit).
//!
//! ```bash
//! cargo bench --package scribe-server
//! cargo bench --package scribe-server -- cache_keys
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scribe_core::{
    Article, ArticleFilter, ArticleId, NewArticle, NewTag, PageRequest, PublishState, Tag,
    TagFilter, TagId,
};
use scribe_repository::{InMemoryArticleStore, InMemoryTagStore};
use scribe_service::cache::cache_keys;
use scribe_service::{
    ArticleService, ArticleServiceImpl, InMemoryCache, RedisCacheService, TagService,
    TagServiceImpl,
};
use std::sync::Arc;

fn sample_tag(id: i64) -> Tag {
    Tag {
        id: TagId::new(id),
        name: format!("tag-{id}"),
        created_by: "bench".to_string(),
        modified_by: String::new(),
        state: PublishState::Published,
        created_on: 1_700_000_000,
        modified_on: 1_700_000_000,
        deleted_on: 0,
    }
}

fn sample_article(id: i64) -> Article {
    Article {
        id: ArticleId::new(id),
        tag_id: TagId::new(1),
        tag: Some(sample_tag(1)),
        title: format!("Article {id}"),
        desc: "A short description of the article".to_string(),
        content: "Lorem ipsum dolor sit amet. ".repeat(40),
        cover_image_url: "https://example.com/cover.png".to_string(),
        created_by: "bench".to_string(),
        modified_by: String::new(),
        state: PublishState::Published,
        created_on: 1_700_000_000,
        modified_on: 1_700_000_000,
        deleted_on: 0,
    }
}

fn bench_cache_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_keys");
    let page = PageRequest::new(3, 10);

    group.bench_function("article", |b| {
        b.iter(|| cache_keys::article(black_box(ArticleId::new(42))));
    });

    let filter = ArticleFilter::default()
        .with_tag(TagId::new(7))
        .with_state(PublishState::Published);
    group.bench_function("article_list", |b| {
        b.iter(|| cache_keys::article_list(black_box(&filter), black_box(page)));
    });

    let filter = TagFilter::default().with_name("rust_lang:2024%");
    group.bench_function("tag_list_escaped", |b| {
        b.iter(|| cache_keys::tag_list(black_box(&filter), black_box(page)));
    });

    group.finish();
}

fn bench_snapshots(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshots");

    for size in [1usize, 10, 100] {
        let articles: Vec<Article> = (1..=size as i64).map(sample_article).collect();
        let encoded = serde_json::to_string(&articles).expect("encode");
        group.throughput(Throughput::Bytes(encoded.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &articles, |b, articles| {
            b.iter(|| serde_json::to_string(black_box(articles)));
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| serde_json::from_str::<Vec<Article>>(black_box(encoded)));
        });
    }

    group.finish();
}

fn bench_read_through(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let mut group = c.benchmark_group("read_through");

    for (label, cached) in [("cache_hit", true), ("cache_disabled", false)] {
        let tags = Arc::new(InMemoryTagStore::new());
        let articles = Arc::new(InMemoryArticleStore::new(tags.clone()));
        let cache: Arc<dyn scribe_service::CacheInterface> = if cached {
            Arc::new(InMemoryCache::new())
        } else {
            Arc::new(RedisCacheService::disabled())
        };
        let tag_service = TagServiceImpl::new(tags.clone(), cache.clone());
        let service = ArticleServiceImpl::new(articles, tags, cache);

        let id = runtime.block_on(async {
            let tag = tag_service
                .add(NewTag {
                    name: "bench".to_string(),
                    created_by: "bench".to_string(),
                    state: PublishState::Published,
                })
                .await
                .expect("seed tag");
            let article = service
                .add(NewArticle {
                    tag_id: tag.id,
                    title: "Bench".to_string(),
                    desc: "d".to_string(),
                    content: "Lorem ipsum. ".repeat(100),
                    cover_image_url: String::new(),
                    created_by: "bench".to_string(),
                    state: PublishState::Published,
                })
                .await
                .expect("seed article");
            // populate the cache before measuring
            let _ = service.get(article.id).await;
            article.id
        });

        group.bench_function(label, |b| {
            b.to_async(&runtime).iter(|| service.get(black_box(id)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cache_keys, bench_snapshots, bench_read_through);
criterion_main!(benches);
