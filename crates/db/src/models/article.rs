//! Article models, composed views, and DTOs.
//!
//! The entity struct mirrors the `articles` table; derived values (snippet,
//! joined tags) are computed on read and never stored. The raw tag array
//! never leaves this layer: serialization goes through [`ArticleView`],
//! which carries the joined string form.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gazette_core::article;
use gazette_core::error::CoreError;
use gazette_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `articles` table.
///
/// Deliberately not `Serialize`: responses are built from [`ArticleView`]
/// so tags always leave as the joined string.
#[derive(Debug, Clone, FromRow)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub version: i32,
    pub tags: Vec<String>,
    pub author_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Article {
    /// Preview snippet, recomputed from the current in-memory content.
    pub fn snippet(&self) -> String {
        article::snippet(Some(&self.content))
    }

    /// External form of the tags: joined with `", "`.
    pub fn tags_joined(&self) -> String {
        article::join_tags(&self.tags)
    }

    /// Shorten the in-memory content to its first `len` characters.
    ///
    /// Does not touch the store and does not change `version`; the row stays
    /// stale until an explicit update persists it.
    pub fn truncate(&mut self, len: usize) {
        self.content = article::truncate(&self.content, len);
    }
}

/// Join row backing [`ArticleWithAuthor`].
#[derive(Debug, Clone, FromRow)]
pub struct ArticleAuthorRow {
    #[sqlx(flatten)]
    pub article: Article,
    pub author_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Composed views (read shapes)
// ---------------------------------------------------------------------------

/// An article with its author resolved via an explicit join.
///
/// The base [`Article`] shape is never mutated to carry the association; the
/// author arrives as a separate composed field.
#[derive(Debug, Clone)]
pub struct ArticleWithAuthor {
    pub article: Article,
    pub author: Option<AuthorView>,
}

impl From<ArticleAuthorRow> for ArticleWithAuthor {
    fn from(row: ArticleAuthorRow) -> Self {
        let author = row.article.author_id.map(|id| AuthorView {
            id,
            name: row.author_name,
        });
        Self {
            article: row.article,
            author,
        }
    }
}

/// The author as embedded in article responses.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorView {
    pub id: DbId,
    pub name: Option<String>,
}

/// Serialization shape for articles.
///
/// `tags` is the joined string form and `snippet` is derived; `author` is
/// present only when the caller fetched the article with its association.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleView {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub snippet: String,
    pub version: i32,
    pub tags: String,
    pub author_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorView>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Article> for ArticleView {
    fn from(article: Article) -> Self {
        let snippet = article.snippet();
        let tags = article.tags_joined();
        Self {
            id: article.id,
            title: article.title,
            content: article.content,
            snippet,
            version: article.version,
            tags,
            author_id: article.author_id,
            author: None,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

impl From<ArticleWithAuthor> for ArticleView {
    fn from(found: ArticleWithAuthor) -> Self {
        let mut view = Self::from(found.article);
        view.author = found.author;
        view
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for updating an existing article. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl UpdateArticle {
    /// Revalidate the fields being changed.
    ///
    /// An update may omit any field, but a title it does carry must be
    /// non-blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(CoreError::Validation("title must not be empty".into()));
            }
        }
        Ok(())
    }
}
