//! Listing query extractors.
//!
//! `page` is one-based. Absent or out-of-range filter values mean the filter
//! is not applied.

use scribe_core::{ArticleFilter, TagFilter};
use serde::Deserialize;
use utoipa::IntoParams;

/// Unset marker passed to the `from_raw` filter constructors.
const UNSET: i64 = -1;

/// Query parameters for article listings.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListQuery {
    /// One-based page number.
    #[serde(default)]
    pub page: Option<i64>,
    /// Only articles on this tag.
    #[serde(default)]
    pub tag_id: Option<i64>,
    /// Only articles in this state (0 draft, 1 published).
    #[serde(default)]
    pub state: Option<i64>,
}

impl ArticleListQuery {
    /// Returns the listing filter for this query.
    #[must_use]
    pub fn filter(&self) -> ArticleFilter {
        ArticleFilter::from_raw(self.tag_id.unwrap_or(UNSET), self.state.unwrap_or(UNSET))
    }
}

/// Query parameters for tag listings.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TagListQuery {
    /// One-based page number.
    #[serde(default)]
    pub page: Option<i64>,
    /// Only the tag with this exact name.
    #[serde(default)]
    pub name: Option<String>,
    /// Only tags in this state (0 draft, 1 published).
    #[serde(default)]
    pub state: Option<i64>,
}

impl TagListQuery {
    /// Returns the listing filter for this query.
    #[must_use]
    pub fn filter(&self) -> TagFilter {
        TagFilter::from_raw(self.name.as_deref(), self.state.unwrap_or(UNSET))
    }
}
