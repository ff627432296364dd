//! MySQL tag store.

use crate::{traits::TagStore, DatabasePoolInterface};
use async_trait::async_trait;
use scribe_core::{
    NewTag, PageRequest, PublishState, ScribeError, ScribeResult, Tag, TagFilter, TagId, TagPatch,
    NOT_DELETED,
};
use sqlx::{FromRow, MySql, QueryBuilder};
use std::sync::Arc;
use tracing::debug;

const TAG_COLUMNS: &str =
    "id, name, created_by, modified_by, state, created_on, modified_on, deleted_on";

/// MySQL-backed [`TagStore`] over the `blog_tag` table.
#[derive(Clone)]
pub struct MySqlTagStore {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlTagStore {
    /// Creates a new MySQL tag store.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(&self, column: &str, value: TagLookup<'_>) -> ScribeResult<Option<Tag>> {
        let mut qb = QueryBuilder::<MySql>::new(format!("SELECT {TAG_COLUMNS} FROM blog_tag WHERE "));
        qb.push(column).push(" = ");
        match value {
            TagLookup::Id(id) => qb.push_bind(id),
            TagLookup::Name(name) => qb.push_bind(name),
        };
        qb.push(" AND deleted_on = ").push_bind(NOT_DELETED).push(" LIMIT 1");

        let row: Option<TagRow> = qb.build_query_as().fetch_optional(self.pool.inner()).await?;
        row.map(Tag::try_from).transpose()
    }
}

enum TagLookup<'a> {
    Id(i64),
    Name(&'a str),
}

/// Database row representation of a tag.
#[derive(Debug, FromRow)]
pub(crate) struct TagRow {
    id: i64,
    name: String,
    created_by: String,
    modified_by: String,
    state: i8,
    created_on: i64,
    modified_on: i64,
    deleted_on: i64,
}

impl TryFrom<TagRow> for Tag {
    type Error = ScribeError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id),
            name: row.name,
            created_by: row.created_by,
            modified_by: row.modified_by,
            state: parse_state(row.state.into())?,
            created_on: row.created_on,
            modified_on: row.modified_on,
            deleted_on: row.deleted_on,
        })
    }
}

pub(crate) fn parse_state(code: i64) -> ScribeResult<PublishState> {
    PublishState::from_code(code)
        .ok_or_else(|| ScribeError::Database(format!("Invalid state in database: {}", code)))
}

fn push_filter<'a>(qb: &mut QueryBuilder<'a, MySql>, filter: &'a TagFilter) {
    qb.push(" WHERE deleted_on = ").push_bind(NOT_DELETED);
    if let Some(name) = &filter.name {
        qb.push(" AND name = ").push_bind(name.as_str());
    }
    if let Some(state) = filter.state {
        qb.push(" AND state = ").push_bind(state.code());
    }
}

#[async_trait]
impl TagStore for MySqlTagStore {
    async fn exists_by_id(&self, id: TagId) -> ScribeResult<bool> {
        let result: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM blog_tag WHERE id = ? AND deleted_on = ? LIMIT 1")
                .bind(id.into_inner())
                .bind(NOT_DELETED)
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn exists_by_name(&self, name: &str) -> ScribeResult<bool> {
        let result: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM blog_tag WHERE name = ? AND deleted_on = ? LIMIT 1")
                .bind(name)
                .bind(NOT_DELETED)
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn find_by_id(&self, id: TagId) -> ScribeResult<Option<Tag>> {
        debug!("Finding tag by id: {}", id);
        self.fetch_one_where("id", TagLookup::Id(id.into_inner())).await
    }

    async fn find_by_name(&self, name: &str) -> ScribeResult<Option<Tag>> {
        debug!("Finding tag by name: {}", name);
        self.fetch_one_where("name", TagLookup::Name(name)).await
    }

    async fn find_by_filter(&self, filter: &TagFilter, page: PageRequest) -> ScribeResult<Vec<Tag>> {
        debug!("Finding tags: {:?}, offset: {}, size: {}", filter, page.offset(), page.size);

        let mut qb = QueryBuilder::<MySql>::new(format!("SELECT {TAG_COLUMNS} FROM blog_tag"));
        push_filter(&mut qb, filter);
        qb.push(" ORDER BY id LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let rows: Vec<TagRow> = qb.build_query_as().fetch_all(self.pool.inner()).await?;
        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn count_by_filter(&self, filter: &TagFilter) -> ScribeResult<u64> {
        let mut qb = QueryBuilder::<MySql>::new("SELECT COUNT(*) FROM blog_tag");
        push_filter(&mut qb, filter);

        let count: i64 = qb.build_query_scalar().fetch_one(self.pool.inner()).await?;
        Ok(count.unsigned_abs())
    }

    async fn insert(&self, tag: &NewTag, created_on: i64) -> ScribeResult<Tag> {
        debug!("Inserting tag: {}", tag.name);

        // MySQL has no RETURNING, so insert then select
        let result = sqlx::query(
            r#"
            INSERT INTO blog_tag (name, created_by, modified_by, state, created_on, modified_on, deleted_on)
            VALUES (?, ?, '', ?, ?, ?, 0)
            "#,
        )
        .bind(&tag.name)
        .bind(&tag.created_by)
        .bind(tag.state.code())
        .bind(created_on)
        .bind(created_on)
        .execute(self.pool.inner())
        .await?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|e| ScribeError::Database(format!("Invalid insert id: {}", e)))?;
        self.find_by_id(TagId::new(id))
            .await?
            .ok_or_else(|| ScribeError::Internal("Failed to fetch inserted tag".to_string()))
    }

    async fn update_fields(&self, id: TagId, patch: &TagPatch, modified_on: i64) -> ScribeResult<bool> {
        debug!("Updating tag: {}", id);

        let mut qb = QueryBuilder::<MySql>::new("UPDATE blog_tag SET modified_on = ");
        qb.push_bind(modified_on);
        if let Some(name) = &patch.name {
            qb.push(", name = ").push_bind(name.as_str());
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

    async fn soft_delete(&self, id: TagId, deleted_on: i64) -> ScribeResult<bool> {
        debug!("Soft deleting tag: {}", id);

        let result = sqlx::query("UPDATE blog_tag SET deleted_on = ? WHERE id = ? AND deleted_on = ?")
            .bind(deleted_on)
            .bind(id.into_inner())
            .bind(NOT_DELETED)
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn purge_soft_deleted(&self) -> ScribeResult<u64> {
        let result = sqlx::query("DELETE FROM blog_tag WHERE deleted_on != ?")
            .bind(NOT_DELETED)
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected())
    }
}

impl std::fmt::Debug for MySqlTagStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlTagStore").finish_non_exhaustive()
    }
}
