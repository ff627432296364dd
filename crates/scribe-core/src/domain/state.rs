//! Publish state value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Publication state shared by articles and tags.
///
/// Persisted and serialized as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum PublishState {
    /// Not visible to readers.
    #[default]
    Draft,
    /// Visible to readers.
    Published,
}

impl PublishState {
    /// Returns the integer code stored in the database.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Draft => 0,
            Self::Published => 1,
        }
    }

    /// Maps an integer code back to a state; anything outside {0, 1} is `None`.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Draft),
            1 => Some(Self::Published),
            _ => None,
        }
    }
}

impl From<PublishState> for i64 {
    fn from(state: PublishState) -> Self {
        state.code()
    }
}

impl TryFrom<i64> for PublishState {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("invalid publish state: {}", code))
    }
}

impl fmt::Display for PublishState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
