//! Application state for Axum handlers.

use scribe_core::PageRequest;
use scribe_service::{ArticleService, TagService};
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub article_service: Arc<dyn ArticleService>,
    pub tag_service: Arc<dyn TagService>,
    /// Items per listing page.
    pub page_size: u64,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        article_service: Arc<dyn ArticleService>,
        tag_service: Arc<dyn TagService>,
        page_size: u64,
    ) -> Self {
        Self {
            article_service,
            tag_service,
            page_size,
        }
    }

    /// Resolves both services from a Shaku module.
    pub fn from_module<M>(module: &M, page_size: u64) -> Self
    where
        M: Module + HasComponent<dyn ArticleService> + HasComponent<dyn TagService>,
    {
        Self::new(module.resolve(), module.resolve(), page_size)
    }

    /// Resolves a one-based page number against the configured page size.
    #[must_use]
    pub fn page(&self, page: Option<i64>) -> PageRequest {
        PageRequest::from_one_based(page.unwrap_or(1), self.page_size)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}
