//! # Scribe Domain
//!
//! Articles, tags, and the query/patch types the store and service layers
//! exchange. Timestamps are Unix epoch seconds; `deleted_on == 0` marks a
//! live row.

pub mod article;
pub mod filter;
pub mod state;
pub mod tag;

pub use article::*;
pub use filter::*;
pub use state::*;
pub use tag::*;

/// Marker stored in `deleted_on` for rows that have not been soft-deleted.
pub const NOT_DELETED: i64 = 0;

/// Returns the current time as Unix epoch seconds.
#[must_use]
pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}
