//! Tag request DTOs.

use scribe_core::rules::not_blank;
use scribe_core::{NewTag, PublishState, TagPatch};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a tag.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTagRequest {
    #[validate(
        custom(function = "not_blank", message = "name is required"),
        length(max = 100, message = "name cannot exceed 100 characters")
    )]
    pub name: String,

    #[validate(
        custom(function = "not_blank", message = "created_by is required"),
        length(max = 100, message = "created_by cannot exceed 100 characters")
    )]
    pub created_by: String,

    #[serde(default)]
    #[validate(range(min = 0, max = 1, message = "state must be 0 or 1"))]
    pub state: i64,
}

impl From<CreateTagRequest> for NewTag {
    fn from(request: CreateTagRequest) -> Self {
        Self {
            name: request.name,
            created_by: request.created_by,
            state: PublishState::from_code(request.state).unwrap_or_default(),
        }
    }
}

/// Request to edit a tag. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTagRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(
        custom(function = "not_blank", message = "modified_by is required"),
        length(max = 100, message = "modified_by cannot exceed 100 characters")
    )]
    pub modified_by: String,

    #[validate(range(min = 0, max = 1, message = "state must be 0 or 1"))]
    pub state: Option<i64>,
}

impl From<UpdateTagRequest> for TagPatch {
    fn from(request: UpdateTagRequest) -> Self {
        Self {
            name: request.name,
            modified_by: Some(request.modified_by),
            state: request.state.and_then(PublishState::from_code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tag_request() {
        let request = CreateTagRequest {
            name: "rust".to_string(),
            created_by: "alice".to_string(),
            state: 1,
        };
        assert!(request.validate().is_ok());

        let tag = NewTag::from(request);
        assert_eq!(tag.state, PublishState::Published);
    }

    #[test]
    fn test_create_tag_request_rejects_long_name() {
        let request = CreateTagRequest {
            name: "x".repeat(101),
            created_by: "alice".to_string(),
            state: 0,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_update_tag_request_into_patch() {
        let request = UpdateTagRequest {
            name: None,
            modified_by: "bob".to_string(),
            state: Some(0),
        };
        let patch = TagPatch::from(request);
        assert!(patch.name.is_none());
        assert_eq!(patch.state, Some(PublishState::Draft));
        assert_eq!(patch.modified_by.as_deref(), Some("bob"));
    }
}
