//! Tag entity.

use super::{PublishState, NOT_DELETED};
use crate::TagId;
use serde::{Deserialize, Serialize};

/// A tag articles are filed under. Names are unique among live tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Tag {
    /// Store-assigned identifier.
    pub id: TagId,
    /// Display name.
    pub name: String,
    /// Author of the tag.
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

impl Tag {
    /// Returns true if the tag has not been soft-deleted.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.deleted_on == NOT_DELETED
    }
}

/// Insert payload for a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub name: String,
    pub created_by: String,
    pub state: PublishState,
}

/// Partial update for a tag; `None` leaves a column unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPatch {
    pub name: Option<String>,
    pub modified_by: Option<String>,
    pub state: Option<PublishState>,
}

impl TagPatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.modified_by.is_none() && self.state.is_none()
    }

    /// Applies the patch to an in-memory tag.
    pub fn apply_to(&self, tag: &mut Tag, modified_on: i64) {
        if let Some(name) = &self.name {
            tag.name.clone_from(name);
        }
        if let Some(modified_by) = &self.modified_by {
            tag.modified_by.clone_from(modified_by);
        }
        if let Some(state) = self.state {
            tag.state = state;
        }
        tag.modified_on = modified_on;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tag {
        Tag {
            id: TagId::new(1),
            name: "rust".to_string(),
            created_by: "alice".to_string(),
            modified_by: String::new(),
            state: PublishState::Published,
            created_on: 100,
            modified_on: 100,
            deleted_on: 0,
        }
    }

    #[test]
    fn test_patch_only_touches_provided_fields() {
        let mut tag = sample();
        let patch = TagPatch {
            modified_by: Some("bob".to_string()),
            ..TagPatch::default()
        };
        patch.apply_to(&mut tag, 200);
        assert_eq!(tag.name, "rust");
        assert_eq!(tag.modified_by, "bob");
        assert_eq!(tag.state, PublishState::Published);
        assert_eq!(tag.modified_on, 200);
    }

    #[test]
    fn test_empty_patch() {
        assert!(TagPatch::default().is_empty());
        assert!(!TagPatch {
            state: Some(PublishState::Draft),
            ..TagPatch::default()
        }
        .is_empty());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["state"], 1);
        assert_eq!(json["deleted_on"], 0);
    }
}
