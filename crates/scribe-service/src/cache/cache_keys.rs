//! Cache key derivation.
//!
//! Single entities map to `ARTICLE_<id>` / `TAG_<id>`. Listings map to the
//! entity's list prefix followed by every active filter field in a fixed
//! order, then the page offset and size:
//!
//! ```text
//! ARTICLE_LIST_tag:<tag_id>_state:<state>_page:<offset>_size:<size>
//! TAG_LIST_name:<name>_state:<state>_page:<offset>_size:<size>
//! ```
//!
//! Unset fields are omitted along with their label. Tag names are escaped so
//! no name can reproduce another filter's segments.

use scribe_core::{ArticleFilter, ArticleId, PageRequest, TagFilter, TagId};
use std::fmt::Write;
use std::time::Duration;

/// TTL applied to every cache entry written by the services.
pub const ENTITY_TTL: Duration = Duration::from_secs(3600);

const ARTICLE: &str = "ARTICLE";
const TAG: &str = "TAG";
const LIST: &str = "LIST";

/// Key for a single article snapshot.
#[must_use]
pub fn article(id: ArticleId) -> String {
    format!("{ARTICLE}_{id}")
}

/// Key for a single tag snapshot.
#[must_use]
pub fn tag(id: TagId) -> String {
    format!("{TAG}_{id}")
}

/// Key for one page of an article listing.
#[must_use]
pub fn article_list(filter: &ArticleFilter, page: PageRequest) -> String {
    let mut key = format!("{ARTICLE}_{LIST}");
    if let Some(tag_id) = filter.tag_id {
        push_segment(&mut key, "tag", tag_id);
    }
    if let Some(state) = filter.state {
        push_segment(&mut key, "state", state.code());
    }
    push_page(&mut key, page);
    key
}

/// Key for one page of a tag listing.
#[must_use]
pub fn tag_list(filter: &TagFilter, page: PageRequest) -> String {
    let mut key = format!("{TAG}_{LIST}");
    if let Some(name) = &filter.name {
        push_segment(&mut key, "name", escape(name));
    }
    if let Some(state) = filter.state {
        push_segment(&mut key, "state", state.code());
    }
    push_page(&mut key, page);
    key
}

fn push_segment(key: &mut String, label: &str, value: impl std::fmt::Display) {
    // Writing into a String cannot fail
    let _ = write!(key, "_{label}:{value}");
}

fn push_page(key: &mut String, page: PageRequest) {
    push_segment(key, "page", page.offset());
    push_segment(key, "size", page.size);
}

/// Percent-encodes the characters that delimit key segments.
#[must_use]
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => escaped.push_str("%25"),
            '_' => escaped.push_str("%5F"),
            ':' => escaped.push_str("%3A"),
            other => escaped.push(other),
        }
    }
    escaped
}
