//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

/// A resolved request for a page of results.
///
/// `page` is zero-based; callers coming from the HTTP layer convert the
/// one-based query parameter with [`PageRequest::from_one_based`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (0-indexed).
    pub page: u64,
    /// The number of items per page.
    pub size: u64,
}

impl PageRequest {
    /// The default page size.
    pub const DEFAULT_SIZE: u64 = 10;
    /// The maximum allowed page size.
    pub const MAX_SIZE: u64 = 100;
    /// The highest page index; keeps `offset()` within a signed 64-bit column.
    pub const MAX_PAGE: u64 = i64::MAX as u64 / Self::MAX_SIZE;

    /// Creates a new page request.
    ///
    /// `page` is capped at [`Self::MAX_PAGE`] and `size` clamped to
    /// `1..=MAX_SIZE`.
    #[must_use]
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page: page.min(Self::MAX_PAGE),
            size: size.clamp(1, Self::MAX_SIZE),
        }
    }

    /// Creates a page request from a one-based page number.
    ///
    /// Any page number below 1 resolves to the first page; numbers past
    /// [`Self::MAX_PAGE`] resolve to the last addressable page.
    #[must_use]
    pub fn from_one_based(page: i64, size: u64) -> Self {
        let index = u64::try_from(page.saturating_sub(1)).unwrap_or(0);
        Self::new(index, size)
    }

    /// Creates a page request for the first page with default size.
    #[must_use]
    pub fn first() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }

    /// Returns the offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Information about a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PageInfo {
    /// The current page number (1-indexed, as requested over HTTP).
    pub page: u64,
    /// The number of items per page.
    pub size: u64,
    /// The total number of matching items.
    pub total: u64,
    /// The total number of pages.
    pub total_pages: u64,
}

impl PageInfo {
    /// Creates page info for a resolved request and a total count.
    #[must_use]
    pub fn new(request: PageRequest, total: u64) -> Self {
        let total_pages = if request.size > 0 {
            total.div_ceil(request.size)
        } else {
            0
        };

        Self {
            page: request.page + 1,
            size: request.size,
            total,
            total_pages,
        }
    }
}

/// A page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub lists: Vec<T>,
    /// Information about this page.
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(lists: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            lists,
            info: PageInfo::new(request, total),
        }
    }

    /// Maps the page content to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            lists: self.lists.into_iter().map(f).collect(),
            info: self.info,
        }
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns the total number of matching items.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.info.total
    }
}
