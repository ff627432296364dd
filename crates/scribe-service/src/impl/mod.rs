//! Service implementations.
//!
//! Trait definitions live in the parent module (`article_service.rs`,
//! `tag_service.rs`).

pub mod article_service_impl;
pub mod tag_service_impl;

pub use article_service_impl::ArticleServiceImpl;
pub use tag_service_impl::TagServiceImpl;
