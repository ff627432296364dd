//! OpenAPI documentation configuration.

use crate::controllers::HealthResponse;
use scribe_core::{Article, ArticleId, ErrorResponse, FieldError, PageInfo, Tag, TagId};
use scribe_service::{
    ArticleListResponse, CreateArticleRequest, CreateTagRequest, PurgeResponse, TagListResponse,
    UpdateArticleRequest, UpdateTagRequest,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Scribe API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scribe Blog API",
        version = "1.0.0",
        description = "Articles and tags behind a read-through cache",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Article endpoints
        crate::controllers::article_controller::list_articles,
        crate::controllers::article_controller::get_article,
        crate::controllers::article_controller::create_article,
        crate::controllers::article_controller::update_article,
        crate::controllers::article_controller::delete_article,
        // Tag endpoints
        crate::controllers::tag_controller::list_tags,
        crate::controllers::tag_controller::get_tag,
        crate::controllers::tag_controller::create_tag,
        crate::controllers::tag_controller::update_tag,
        crate::controllers::tag_controller::delete_tag,
        // Maintenance endpoints
        crate::controllers::maintenance_controller::purge_articles,
        crate::controllers::maintenance_controller::purge_tags,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ArticleId,
            TagId,
            Article,
            Tag,
            PageInfo,
            ErrorResponse,
            FieldError,
            HealthResponse,
            CreateArticleRequest,
            UpdateArticleRequest,
            ArticleListResponse,
            CreateTagRequest,
            UpdateTagRequest,
            TagListResponse,
            PurgeResponse,
        )
    ),
    tags(
        (name = "articles", description = "Article endpoints"),
        (name = "tags", description = "Tag endpoints"),
        (name = "maintenance", description = "Purge soft-deleted rows"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_resource() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/articles",
            "/articles/{id}",
            "/tags",
            "/tags/{id}",
            "/maintenance/tags/purge",
            "/health",
        ] {
            assert!(paths.contains(&expected), "missing path: {expected}");
        }
    }
}
