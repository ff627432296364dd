//! Maintenance controller: purges soft-deleted rows.

use crate::{
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{extract::State, routing::post, Router};
use scribe_service::PurgeResponse;

/// Creates the maintenance router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/articles/purge", post(purge_articles))
        .route("/tags/purge", post(purge_tags))
}

/// Physically remove every soft-deleted article.
#[utoipa::path(
    post,
    path = "/maintenance/articles/purge",
    tag = "maintenance",
    responses(
        (status = 200, description = "Number of purged articles", body = PurgeResponse)
    )
)]
pub async fn purge_articles(State(state): State<AppState>) -> ApiResult<PurgeResponse> {
    let purged = state.article_service.clean_all().await?;
    ok(PurgeResponse { purged })
}

/// Physically remove every soft-deleted tag.
#[utoipa::path(
    post,
    path = "/maintenance/tags/purge",
    tag = "maintenance",
    responses(
        (status = 200, description = "Number of purged tags", body = PurgeResponse)
    )
)]
pub async fn purge_tags(State(state): State<AppState>) -> ApiResult<PurgeResponse> {
    let purged = state.tag_service.clean_all().await?;
    ok(PurgeResponse { purged })
}
