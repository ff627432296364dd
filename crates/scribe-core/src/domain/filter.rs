//! Listing filters.
//!
//! Each field is `None` when the filter is not applied. Raw query values use
//! out-of-range sentinels (non-positive ids, states outside {0, 1}, empty
//! names); `from_raw` maps those to `None` instead of rejecting them.

use super::PublishState;
use crate::TagId;
use serde::{Deserialize, Serialize};

/// Filter for article listings. Soft-deleted rows are always excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleFilter {
    pub tag_id: Option<TagId>,
    pub state: Option<PublishState>,
}

impl ArticleFilter {
    /// Builds a filter from raw query values.
    #[must_use]
    pub fn from_raw(tag_id: i64, state: i64) -> Self {
        Self {
            tag_id: Some(TagId::new(tag_id)).filter(|id| id.is_valid()),
            state: PublishState::from_code(state),
        }
    }

    #[must_use]
    pub const fn with_tag(mut self, tag_id: TagId) -> Self {
        self.tag_id = Some(tag_id);
        self
    }

    #[must_use]
    pub const fn with_state(mut self, state: PublishState) -> Self {
        self.state = Some(state);
        self
    }
}

/// Filter for tag listings. Soft-deleted rows are always excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagFilter {
    pub name: Option<String>,
    pub state: Option<PublishState>,
}

impl TagFilter {
    /// Builds a filter from raw query values.
    #[must_use]
    pub fn from_raw(name: Option<&str>, state: i64) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()).map(str::to_string),
            state: PublishState::from_code(state),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_state(mut self, state: PublishState) -> Self {
        self.state = Some(state);
        self
    }
}
