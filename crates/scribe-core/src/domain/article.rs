//! Article entity.

use super::{PublishState, Tag, NOT_DELETED};
use crate::{ArticleId, TagId};
use serde::{Deserialize, Serialize};

/// A blog article. `tag` is the preloaded snapshot of the referenced tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Article {
    /// Store-assigned identifier.
    pub id: ArticleId,
    /// Referenced tag.
    pub tag_id: TagId,
    /// Preloaded tag, absent when the tag row has been purged.
    #[serde(default)]
    pub tag: Option<Tag>,
    /// Title.
    pub title: String,
    /// Short description.
    pub desc: String,
    /// Body content.
    pub content: String,
    /// Cover image URL.
    pub cover_image_url: String,
    /// Author of the article.
    pub created_by: String,
    /// Last editor, empty until the first edit.
    pub modified_by: String,
    /// Publication state.
    #[cfg_attr(feature = "openapi", schema(value_type = i64))]
    pub state: PublishState,
    /// Creation time (epoch seconds).
    pub created_on: i64,
    /// Last modification time (epoch seconds).
    pub modified_on: i64,
    /// Soft-delete time (epoch seconds), 0 while live.
    pub deleted_on: i64,
}

impl Article {
    /// Returns true if the article has not been soft-deleted.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.deleted_on == NOT_DELETED
    }
}

/// Insert payload for an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub tag_id: TagId,
    pub title: String,
    pub desc: String,
    pub content: String,
    pub cover_image_url: String,
    pub created_by: String,
    pub state: PublishState,
}

/// Partial update for an article; `None` leaves a column unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticlePatch {
    pub tag_id: Option<TagId>,
    pub title: Option<String>,
    pub desc: Option<String>,
    pub content: Option<String>,
    pub cover_image_url: Option<String>,
    pub modified_by: Option<String>,
    pub state: Option<PublishState>,
}

impl ArticlePatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tag_id.is_none()
            && self.title.is_none()
            && self.desc.is_none()
            && self.content.is_none()
            && self.cover_image_url.is_none()
            && self.modified_by.is_none()
            && self.state.is_none()
    }

    /// Applies the patch to an in-memory article. The preloaded tag is left
    /// for the caller to refresh when `tag_id` changes.
    pub fn apply_to(&self, article: &mut Article, modified_on: i64) {
        if let Some(tag_id) = self.tag_id {
            article.tag_id = tag_id;
        }
        if let Some(title) = &self.title {
            article.title.clone_from(title);
        }
        if let Some(desc) = &self.desc {
            article.desc.clone_from(desc);
        }
        if let Some(content) = &self.content {
            article.content.clone_from(content);
        }
        if let Some(url) = &self.cover_image_url {
            article.cover_image_url.clone_from(url);
        }
        if let Some(modified_by) = &self.modified_by {
            article.modified_by.clone_from(modified_by);
        }
        if let Some(state) = self.state {
            article.state = state;
        }
        article.modified_on = modified_on;
    }
}
