//! MySQL store implementations.

mod article_store;
mod tag_store;

pub use article_store::MySqlArticleStore;
pub use tag_store::MySqlTagStore;
