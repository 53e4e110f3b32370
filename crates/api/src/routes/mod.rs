pub mod articles;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except static assets).
///
/// ```text
/// GET  /                   welcome line
/// GET  /health             service + database health
/// GET  /articles           list
/// POST /articles           create
/// GET  /articles/{id}      fetch (with author)
/// PUT  /articles/{id}      update title
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .merge(health::router())
        .merge(articles::router())
}

/// GET / -- plain-text landing line.
async fn welcome() -> &'static str {
    "Welcome to Articles! Check out our lovely routes."
}
