//! Route definitions for the article resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::articles;
use crate::state::AppState;

/// Article routes mounted at the application root.
///
/// ```text
/// GET  /articles        -> list_articles
/// POST /articles        -> create_article
/// GET  /articles/{id}   -> get_article
/// PUT  /articles/{id}   -> update_article
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/articles/{id}",
            get(articles::get_article).put(articles::update_article),
        )
}
