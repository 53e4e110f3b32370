//! Handlers for the article resource.
//!
//! List and fetch return the article view directly (an array for the list);
//! create and update return the `{message, article}` envelope. Missing IDs
//! map to 404 for both GET and PUT; validation failures map to 400.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use gazette_core::article::ArticleDraft;
use gazette_core::error::CoreError;
use gazette_core::types::DbId;
use gazette_db::models::article::{ArticleView, UpdateArticle};
use gazette_db::repositories::ArticleRepo;

use crate::error::{AppError, AppResult};
use crate::response::SavedArticle;
use crate::state::AppState;

/// PUT request body. The route contract overwrites the title only; other
/// fields are not accepted from the wire.
#[derive(Debug, Deserialize)]
pub struct UpdateTitleRequest {
    pub title: String,
}

/// GET /articles
///
/// List all articles in insertion order.
pub async fn list_articles(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let articles = ArticleRepo::find_all(&state.pool).await?;
    let views: Vec<ArticleView> = articles.into_iter().map(ArticleView::from).collect();

    Ok(Json(views))
}

/// GET /articles/{id}
///
/// Fetch one article with its author resolved. 404 when the ID is unknown.
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = ArticleRepo::find_by_id_with_author(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }))?;

    Ok(Json(ArticleView::from(found)))
}

/// POST /articles
///
/// Validate the draft and persist it. `version` starts at 0 and `tags`
/// default to empty.
pub async fn create_article(
    State(state): State<AppState>,
    Json(input): Json<ArticleDraft>,
) -> AppResult<impl IntoResponse> {
    let (title, content) = input.validate()?;

    let article = ArticleRepo::create(&state.pool, title, content, &input.tags).await?;

    tracing::info!(article_id = article.id, "Article created");

    Ok((
        StatusCode::CREATED,
        Json(SavedArticle {
            message: "Created successfully",
            article: ArticleView::from(article),
        }),
    ))
}

/// PUT /articles/{id}
///
/// Overwrite the title, revalidate, and save. The update path bumps
/// `version` by exactly 1. 404 when the ID is unknown.
pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTitleRequest>,
) -> AppResult<impl IntoResponse> {
    let changes = UpdateArticle {
        title: Some(input.title),
        ..Default::default()
    };
    changes.validate()?;

    let article = ArticleRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }))?;

    tracing::info!(article_id = id, version = article.version, "Article updated");

    Ok(Json(SavedArticle {
        message: "Updated successfully",
        article: ArticleView::from(article),
    }))
}
