//! MySQL article store.

use super::tag_store::parse_state;
use crate::{traits::ArticleStore, DatabasePoolInterface};
use async_trait::async_trait;
use scribe_core::{
    Article, ArticleFilter, ArticleId, ArticlePatch, NewArticle, PageRequest, ScribeError,
    ScribeResult, Tag, TagId, NOT_DELETED,
};
use sqlx::{FromRow, MySql, QueryBuilder};
use std::sync::Arc;
use tracing::debug;

/// Article columns plus the live tag row, prefixed `tag_`, from a LEFT JOIN.
const ARTICLE_SELECT: &str = r#"
    SELECT a.id, a.tag_id, a.title, a.`desc`, a.content, a.cover_image_url,
           a.created_by, a.modified_by, a.state, a.created_on, a.modified_on, a.deleted_on,
           t.id AS tag_ref_id, t.name AS tag_name, t.created_by AS tag_created_by,
           t.modified_by AS tag_modified_by, t.state AS tag_state,
           t.created_on AS tag_created_on, t.modified_on AS tag_modified_on,
           t.deleted_on AS tag_deleted_on
    FROM blog_article a
    LEFT JOIN blog_tag t ON t.id = a.tag_id AND t.deleted_on = 0
"#;

/// MySQL-backed [`ArticleStore`] over the `blog_article` table.
#[derive(Clone)]
pub struct MySqlArticleStore {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlArticleStore {
    /// Creates a new MySQL article store.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of an article joined with its tag.
#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    tag_id: i64,
    title: String,
    desc: String,
    content: String,
    cover_image_url: String,
    created_by: String,
    modified_by: String,
    state: i8,
    created_on: i64,
    modified_on: i64,
    deleted_on: i64,
    tag_ref_id: Option<i64>,
    tag_name: Option<String>,
    tag_created_by: Option<String>,
    tag_modified_by: Option<String>,
    tag_state: Option<i8>,
    tag_created_on: Option<i64>,
    tag_modified_on: Option<i64>,
    tag_deleted_on: Option<i64>,
}

impl ArticleRow {
    fn take_tag(&mut self) -> ScribeResult<Option<Tag>> {
        let Some(id) = self.tag_ref_id else {
            return Ok(None);
        };
        Ok(Some(Tag {
            id: TagId::new(id),
            name: self.tag_name.take().unwrap_or_default(),
            created_by: self.tag_created_by.take().unwrap_or_default(),
            modified_by: self.tag_modified_by.take().unwrap_or_default(),
            state: parse_state(self.tag_state.unwrap_or_default().into())?,
            created_on: self.tag_created_on.unwrap_or_default(),
            modified_on: self.tag_modified_on.unwrap_or_default(),
            deleted_on: self.tag_deleted_on.unwrap_or_default(),
        }))
    }
}

impl TryFrom<ArticleRow> for Article {
    type Error = ScribeError;

    fn try_from(mut row: ArticleRow) -> Result<Self, Self::Error> {
        let tag = row.take_tag()?;
        Ok(Article {
            id: ArticleId::new(row.id),
            tag_id: TagId::new(row.tag_id),
            tag,
            title: row.title,
            desc: row.desc,
            content: row.content,
            cover_image_url: row.cover_image_url,
            created_by: row.created_by,
            modified_by: row.modified_by,
            state: parse_state(row.state.into())?,
            created_on: row.created_on,
            modified_on: row.modified_on,
            deleted_on: row.deleted_on,
        })
    }
}

/// Appends the live-row predicate plus the active filter fields.
fn push_filter(qb: &mut QueryBuilder<'_, MySql>, filter: &ArticleFilter, alias: &str) {
    qb.push(format!(" WHERE {alias}deleted_on = ")).push_bind(NOT_DELETED);
    if let Some(tag_id) = filter.tag_id {
        qb.push(format!(" AND {alias}tag_id = ")).push_bind(tag_id.into_inner());
    }
    if let Some(state) = filter.state {
        qb.push(format!(" AND {alias}state = ")).push_bind(state.code());
    }
}

#[async_trait]
impl ArticleStore for MySqlArticleStore {
    async fn exists_by_id(&self, id: ArticleId) -> ScribeResult<bool> {
        let result: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM blog_article WHERE id = ? AND deleted_on = ? LIMIT 1")
                .bind(id.into_inner())
                .bind(NOT_DELETED)
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn find_by_id(&self, id: ArticleId) -> ScribeResult<Option<Article>> {
        debug!("Finding article by id: {}", id);

        let mut qb = QueryBuilder::<MySql>::new(ARTICLE_SELECT);
        qb.push(" WHERE a.id = ")
            .push_bind(id.into_inner())
            .push(" AND a.deleted_on = ")
            .push_bind(NOT_DELETED);

        let row: Option<ArticleRow> = qb.build_query_as().fetch_optional(self.pool.inner()).await?;
        row.map(Article::try_from).transpose()
    }

    async fn find_by_filter(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> ScribeResult<Vec<Article>> {
        debug!("Finding articles: {:?}, offset: {}, size: {}", filter, page.offset(), page.size);

        let mut qb = QueryBuilder::<MySql>::new(ARTICLE_SELECT);
        push_filter(&mut qb, filter, "a.");
        qb.push(" ORDER BY a.id LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let rows: Vec<ArticleRow> = qb.build_query_as().fetch_all(self.pool.inner()).await?;
        rows.into_iter().map(Article::try_from).collect()
    }

    async fn count_by_filter(&self, filter: &ArticleFilter) -> ScribeResult<u64> {
        let mut qb = QueryBuilder::<MySql>::new("SELECT COUNT(*) FROM blog_article");
        push_filter(&mut qb, filter, "");

        let count: i64 = qb.build_query_scalar().fetch_one(self.pool.inner()).await?;
        Ok(count.unsigned_abs())
    }

    async fn insert(&self, article: &NewArticle, created_on: i64) -> ScribeResult<Article> {
        debug!("Inserting article: {}", article.title);

        // MySQL has no RETURNING, so insert then select
        let result = sqlx::query(
            r#"
            INSERT INTO blog_article (tag_id, title, `desc`, content, cover_image_url,
                                      created_by, modified_by, state, created_on, modified_on, deleted_on)
            VALUES (?, ?, ?, ?, ?, ?, '', ?, ?, ?, 0)
            "#,
        )
        .bind(article.tag_id.into_inner())
        .bind(&article.title)
        .bind(&article.desc)
        .bind(&article.content)
        .bind(&article.cover_image_url)
        .bind(&article.created_by)
        .bind(article.state.code())
        .bind(created_on)
        .bind(created_on)
        .execute(self.pool.inner())
        .await?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|e| ScribeError::Database(format!("Invalid insert id: {}", e)))?;
        self.find_by_id(ArticleId::new(id))
            .await?
            .ok_or_else(|| ScribeError::Internal("Failed to fetch inserted article".to_string()))
    }

    async fn update_fields(
        &self,
        id: ArticleId,
        patch: &ArticlePatch,
        modified_on: i64,
    ) -> ScribeResult<bool> {
        debug!("Updating article: {}", id);

        let mut qb = QueryBuilder::<MySql>::new("UPDATE blog_article SET modified_on = ");
        qb.push_bind(modified_on);
        if let Some(tag_id) = patch.tag_id {
            qb.push(", tag_id = ").push_bind(tag_id.into_inner());
        }
        if let Some(title) = &patch.title {
            qb.push(", title = ").push_bind(title.as_str());
        }
        if let Some(desc) = &patch.desc {
            qb.push(", `desc` = ").push_bind(desc.as_str());
        }
        if let Some(content) = &patch.content {
            qb.push(", content = ").push_bind(content.as_str());
        }
        if let Some(url) = &patch.cover_image_url {
            qb.push(", cover_image_url = ").push_bind(url.as_str());
        }
        if let Some(modified_by) = &patch.modified_by {
            qb.push(", modified_by = ").push_bind(modified_by.as_str());
        }
        if let Some(state) = patch.state {
            qb.push(", state = ").push_bind(state.code());
        }
        qb.push(" WHERE id = ")
            .push_bind(id.into_inner())
            .push(" AND deleted_on = ")
            .push_bind(NOT_DELETED);

        let result = qb.build().execute(self.pool.inner()).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn soft_delete(&self, id: ArticleId, deleted_on: i64) -> ScribeResult<bool> {
        debug!("Soft deleting article: {}", id);

        let result =
            sqlx::query("UPDATE blog_article SET deleted_on = ? WHERE id = ? AND deleted_on = ?")
                .bind(deleted_on)
                .bind(id.into_inner())
                .bind(NOT_DELETED)
                .execute(self.pool.inner())
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn purge_soft_deleted(&self) -> ScribeResult<u64> {
        let result = sqlx::query("DELETE FROM blog_article WHERE deleted_on != ?")
            .bind(NOT_DELETED)
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected())
    }
}

impl std::fmt::Debug for MySqlArticleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlArticleStore").finish_non_exhaustive()
    }
}
