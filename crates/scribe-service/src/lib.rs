//! # Scribe Service
//!
//! Article and tag services. Reads go through the cache and fall back to the
//! store; writes go to the store and then refresh or drop the single-entity
//! cache entry. Cache failures are logged and never surface to callers.

pub mod article_service;
pub mod cache;
pub mod dto;
pub mod r#impl;
pub mod metrics;
pub mod tag_service;

pub use article_service::*;
pub use cache::*;
pub use dto::*;
pub use r#impl::{ArticleServiceImpl, TagServiceImpl};
pub use tag_service::*;
