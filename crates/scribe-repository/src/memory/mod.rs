//! In-process store implementations for development and tests.
//!
//! Both stores are shaku components; the article store resolves its tag
//! store through injection to preload tags.

mod article_store;
mod tag_store;

pub use article_store::InMemoryArticleStore;
pub use tag_store::InMemoryTagStore;

/// Returns the `[offset, offset + limit)` window of an ordered row set.
fn page_window<T: Clone>(rows: impl Iterator<Item = T>, page: scribe_core::PageRequest) -> Vec<T> {
    let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
    rows.skip(offset).take(limit).collect()
}
