//! Article request DTOs.

use scribe_core::rules::not_blank;
use scribe_core::{ArticlePatch, NewArticle, PublishState, TagId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create an article.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateArticleRequest {
    #[validate(range(min = 1, message = "tag_id must be greater than 0"))]
    pub tag_id: i64,

    #[validate(
        custom(function = "not_blank", message = "title is required"),
        length(max = 100, message = "title cannot exceed 100 characters")
    )]
    pub title: String,

    #[validate(
        custom(function = "not_blank", message = "desc is required"),
        length(max = 255, message = "desc cannot exceed 255 characters")
    )]
    pub desc: String,

    #[validate(custom(function = "not_blank", message = "content is required"))]
    pub content: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "cover_image_url cannot exceed 255 characters"))]
    pub cover_image_url: String,

    #[validate(
        custom(function = "not_blank", message = "created_by is required"),
        length(max = 100, message = "created_by cannot exceed 100 characters")
    )]
    pub created_by: String,

    #[serde(default)]
    #[validate(range(min = 0, max = 1, message = "state must be 0 or 1"))]
    pub state: i64,
}

impl From<CreateArticleRequest> for NewArticle {
    fn from(request: CreateArticleRequest) -> Self {
        Self {
            tag_id: TagId::new(request.tag_id),
            title: request.title,
            desc: request.desc,
            content: request.content,
            cover_image_url: request.cover_image_url,
            created_by: request.created_by,
            state: PublishState::from_code(request.state).unwrap_or_default(),
        }
    }
}

/// Request to edit an article. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateArticleRequest {
    #[validate(range(min = 1, message = "tag_id must be greater than 0"))]
    pub tag_id: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "title must be 1-100 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 255, message = "desc must be 1-255 characters"))]
    pub desc: Option<String>,

    #[validate(length(min = 1, message = "content cannot be empty"))]
    pub content: Option<String>,

    #[validate(length(max = 255, message = "cover_image_url cannot exceed 255 characters"))]
    pub cover_image_url: Option<String>,

    #[validate(
        custom(function = "not_blank", message = "modified_by is required"),
        length(max = 100, message = "modified_by cannot exceed 100 characters")
    )]
    pub modified_by: String,

    #[validate(range(min = 0, max = 1, message = "state must be 0 or 1"))]
    pub state: Option<i64>,
}

impl From<UpdateArticleRequest> for ArticlePatch {
    fn from(request: UpdateArticleRequest) -> Self {
        Self {
            tag_id: request.tag_id.map(TagId::new),
            title: request.title,
            desc: request.desc,
            content: request.content,
            cover_image_url: request.cover_image_url,
            modified_by: Some(request.modified_by),
            state: request.state.and_then(PublishState::from_code),
        }
    }
}
