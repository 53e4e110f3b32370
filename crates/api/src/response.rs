//! Shared response envelope types for API handlers.

use serde::Serialize;

use gazette_db::models::article::ArticleView;

/// `{ "message": ..., "article": ... }` envelope returned by create and
/// update. Typed instead of ad-hoc `serde_json::json!` for compile-time
/// shape safety.
#[derive(Debug, Serialize)]
pub struct SavedArticle {
    pub message: &'static str,
    pub article: ArticleView,
}
