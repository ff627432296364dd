//! Listing response DTOs.

use scribe_core::{Article, Page, PageInfo, Tag};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of articles plus the unpaged total.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub lists: Vec<Article>,
    #[serde(flatten)]
    pub info: PageInfo,
}

impl From<Page<Article>> for ArticleListResponse {
    fn from(page: Page<Article>) -> Self {
        Self {
            lists: page.lists,
            info: page.info,
        }
    }
}

/// One page of tags plus the unpaged total.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagListResponse {
    pub lists: Vec<Tag>,
    #[serde(flatten)]
    pub info: PageInfo,
}

impl From<Page<Tag>> for TagListResponse {
    fn from(page: Page<Tag>) -> Self {
        Self {
            lists: page.lists,
            info: page.info,
        }
    }
}

/// Result of a purge of soft-deleted rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PurgeResponse {
    /// Number of rows physically removed.
    pub purged: u64,
}
