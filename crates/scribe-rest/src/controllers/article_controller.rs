//! Article controller.

use crate::{
    extractors::{ArticleListQuery, ValidatedJson},
    responses::{created, no_content, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use scribe_core::{Article, ArticleId, Page, ScribeError};
use scribe_service::{ArticleListResponse, CreateArticleRequest, UpdateArticleRequest};
use tracing::debug;

/// Creates the article router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_articles).post(create_article))
        .route(
            "/:id",
            get(get_article).put(update_article).delete(delete_article),
        )
}

/// List live articles.
#[utoipa::path(
    get,
    path = "/articles",
    tag = "articles",
    params(ArticleListQuery),
    responses(
        (status = 200, description = "One page of articles", body = ArticleListResponse)
    )
)]
pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticleListQuery>,
) -> ApiResult<ArticleListResponse> {
    debug!("List articles request: {:?}", query);

    let filter = query.filter();
    let page = state.page(query.page);

    let lists = state.article_service.get_all(&filter, page).await?;
    let total = state.article_service.count(&filter).await?;
    ok(Page::new(lists, page, total).into())
}

/// Get an article with its tag.
#[utoipa::path(
    get,
    path = "/articles/{id}",
    tag = "articles",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article", body = Article),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No live article with this id")
    )
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Article> {
    debug!("Get article request: {}", id);

    let id = parse_article_id(&id)?;
    ok(state.article_service.get(id).await?)
}

/// Create an article on an existing tag.
#[utoipa::path(
    post,
    path = "/articles",
    tag = "articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created", body = Article),
        (status = 422, description = "Invalid body or unknown tag")
    )
)]
pub async fn create_article(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateArticleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Article>>), AppError> {
    debug!("Create article request: {}", request.title);

    let article = state.article_service.add(request.into()).await?;
    Ok(created(article))
}

/// Edit an article. Absent fields are left unchanged.
#[utoipa::path(
    put,
    path = "/articles/{id}",
    tag = "articles",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "The edited article", body = Article),
        (status = 404, description = "No live article with this id"),
        (status = 422, description = "Invalid body or unknown tag")
    )
)]
pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateArticleRequest>,
) -> ApiResult<Article> {
    debug!("Update article request: {}", id);

    let id = parse_article_id(&id)?;
    ok(state.article_service.edit(id, request.into()).await?)
}

/// Soft-delete an article.
#[utoipa::path(
    delete,
    path = "/articles/{id}",
    tag = "articles",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 404, description = "No live article with this id")
    )
)]
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete article request: {}", id);

    let id = parse_article_id(&id)?;
    state.article_service.delete(id).await?;
    Ok(no_content())
}

/// Parses a positive article id from a path segment.
fn parse_article_id(id: &str) -> Result<ArticleId, AppError> {
    id.parse::<i64>()
        .ok()
        .map(ArticleId::new)
        .filter(|id| id.is_valid())
        .ok_or_else(|| AppError(ScribeError::validation(format!("Invalid article ID: {}", id))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_article_id() {
        assert_eq!(parse_article_id("12").unwrap(), ArticleId::new(12));
        assert!(parse_article_id("0").is_err());
        assert!(parse_article_id("-3").is_err());
        assert!(parse_article_id("abc").is_err());
    }
}
