//! # Scribe Repository
//!
//! Persistent stores for articles and tags.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ArticleStore> / Arc<dyn TagStore>
//! MySqlArticleStore, MySqlTagStore      (MySQL / SQLx)
//! InMemoryArticleStore, InMemoryTagStore (process-local, shaku components)
//! ```
//!
//! Every store honours soft deletion: rows with a non-zero `deleted_on`
//! are invisible to reads until `purge_soft_deleted` removes them.

pub mod memory;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use memory::{InMemoryArticleStore, InMemoryTagStore};
pub use mysql::*;
pub use pool::*;
pub use traits::*;
