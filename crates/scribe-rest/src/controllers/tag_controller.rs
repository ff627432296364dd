//! Tag controller.

use crate::{
    extractors::{TagListQuery, ValidatedJson},
    responses::{created, no_content, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use scribe_core::{Page, ScribeError, Tag, TagId};
use scribe_service::{CreateTagRequest, TagListResponse, UpdateTagRequest};
use tracing::debug;

/// Creates the tag router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tags).post(create_tag))
        .route("/:id", get(get_tag).put(update_tag).delete(delete_tag))
}

/// List live tags.
#[utoipa::path(
    get,
    path = "/tags",
    tag = "tags",
    params(TagListQuery),
    responses(
        (status = 200, description = "One page of tags", body = TagListResponse)
    )
)]
pub async fn list_tags(
    State(state): State<AppState>,
    Query(query): Query<TagListQuery>,
) -> ApiResult<TagListResponse> {
    debug!("List tags request: {:?}", query);

    let filter = query.filter();
    let page = state.page(query.page);

    let lists = state.tag_service.get_all(&filter, page).await?;
    let total = state.tag_service.count(&filter).await?;
    ok(Page::new(lists, page, total).into())
}

/// Get a tag.
#[utoipa::path(
    get,
    path = "/tags/{id}",
    tag = "tags",
    params(("id" = i64, Path, description = "Tag id")),
    responses(
        (status = 200, description = "The tag", body = Tag),
        (status = 404, description = "No live tag with this id")
    )
)]
pub async fn get_tag(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Tag> {
    debug!("Get tag request: {}", id);

    let id = parse_tag_id(&id)?;
    ok(state.tag_service.get(id).await?)
}

/// Create a tag.
#[utoipa::path(
    post,
    path = "/tags",
    tag = "tags",
    request_body = CreateTagRequest,
    responses(
        (status = 201, description = "Tag created", body = Tag),
        (status = 409, description = "A live tag already uses this name"),
        (status = 422, description = "Invalid body")
    )
)]
pub async fn create_tag(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTagRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Tag>>), AppError> {
    debug!("Create tag request: {}", request.name);

    let tag = state.tag_service.add(request.into()).await?;
    Ok(created(tag))
}

/// Edit a tag. Absent fields are left unchanged.
#[utoipa::path(
    put,
    path = "/tags/{id}",
    tag = "tags",
    params(("id" = i64, Path, description = "Tag id")),
    request_body = UpdateTagRequest,
    responses(
        (status = 200, description = "The edited tag", body = Tag),
        (status = 404, description = "No live tag with this id"),
        (status = 409, description = "Another live tag already uses the new name")
    )
)]
pub async fn update_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateTagRequest>,
) -> ApiResult<Tag> {
    debug!("Update tag request: {}", id);

    let id = parse_tag_id(&id)?;
    ok(state.tag_service.edit(id, request.into()).await?)
}

/// Soft-delete a tag.
#[utoipa::path(
    delete,
    path = "/tags/{id}",
    tag = "tags",
    params(("id" = i64, Path, description = "Tag id")),
    responses(
        (status = 204, description = "Tag deleted"),
        (status = 404, description = "No live tag with this id")
    )
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete tag request: {}", id);

    let id = parse_tag_id(&id)?;
    state.tag_service.delete(id).await?;
    Ok(no_content())
}

fn parse_tag_id(id: &str) -> Result<TagId, AppError> {
    id.parse::<i64>()
        .ok()
        .map(TagId::new)
        .filter(|id| id.is_valid())
        .ok_or_else(|| AppError(ScribeError::validation(format!("Invalid tag ID: {}", id))))
}
