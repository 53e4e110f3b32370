//! Repository for the `articles` table.
//!
//! Explicit SQL for article CRUD, title lookup, and the author association.
//! The association is resolved with a LEFT JOIN into a composed view rather
//! than by reshaping the base entity. The version counter is bumped inside
//! the UPDATE statement itself, so it moves exactly once per successful
//! update and never on create or on in-memory mutation.

use sqlx::PgPool;

use gazette_core::types::DbId;

use crate::models::article::{Article, ArticleAuthorRow, ArticleWithAuthor, UpdateArticle};

/// Column list for `articles` queries.
const ARTICLE_COLUMNS: &str = "\
    id, title, content, version, tags, author_id, created_at, updated_at";

/// Column list for author-join queries, qualified with the `a` alias.
const ARTICLE_JOIN_COLUMNS: &str = "\
    a.id, a.title, a.content, a.version, a.tags, a.author_id, \
    a.created_at, a.updated_at, u.name AS author_name";

/// Provides CRUD operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    // -----------------------------------------------------------------------
    // Article CRUD
    // -----------------------------------------------------------------------

    /// Insert a new article.
    ///
    /// `title` and `content` must have passed draft validation; `version`
    /// starts at 0 and `tags` may be empty.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        content: &str,
        tags: &[String],
    ) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, content, tags) \
             VALUES ($1, $2, $3) \
             RETURNING {ARTICLE_COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(title)
            .bind(content)
            .bind(tags)
            .fetch_one(pool)
            .await
    }

    /// List all articles in insertion order.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!("SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY id");
        sqlx::query_as::<_, Article>(&query).fetch_all(pool).await
    }

    /// Find an article by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a single article by its exact title.
    ///
    /// First match wins when several articles share a title.
    pub async fn find_by_title(
        pool: &PgPool,
        title: &str,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles \
             WHERE title = $1 \
             ORDER BY id \
             LIMIT 1"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// Apply changes to an article, bumping `version` by exactly 1.
    ///
    /// Absent fields keep their stored values. Returns `None` if no article
    /// with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &UpdateArticle,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET \
                 title = COALESCE($2, title), \
                 content = COALESCE($3, content), \
                 tags = COALESCE($4, tags), \
                 version = version + 1, \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {ARTICLE_COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(changes.title.as_deref())
            .bind(changes.content.as_deref())
            .bind(changes.tags.as_deref())
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Author association
    // -----------------------------------------------------------------------

    /// Persist the author reference on an article.
    ///
    /// Returns `None` if no article with the given ID exists.
    pub async fn set_author(
        pool: &PgPool,
        article_id: DbId,
        author_id: DbId,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET \
                 author_id = $2, \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {ARTICLE_COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(article_id)
            .bind(author_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an article by ID with its author resolved.
    pub async fn find_by_id_with_author(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ArticleWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT {ARTICLE_JOIN_COLUMNS} \
             FROM articles a \
             LEFT JOIN users u ON u.id = a.author_id \
             WHERE a.id = $1"
        );
        let row = sqlx::query_as::<_, ArticleAuthorRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(ArticleWithAuthor::from))
    }

    /// Find a single article by exact title with its author resolved.
    pub async fn find_by_title_with_author(
        pool: &PgPool,
        title: &str,
    ) -> Result<Option<ArticleWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT {ARTICLE_JOIN_COLUMNS} \
             FROM articles a \
             LEFT JOIN users u ON u.id = a.author_id \
             WHERE a.title = $1 \
             ORDER BY a.id \
             LIMIT 1"
        );
        let row = sqlx::query_as::<_, ArticleAuthorRow>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(ArticleWithAuthor::from))
    }

    // -----------------------------------------------------------------------
    // Table maintenance
    // -----------------------------------------------------------------------

    /// Remove every article. Used to reset state between test specs.
    pub async fn truncate_all(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query("TRUNCATE articles").execute(pool).await?;
        Ok(())
    }
}
