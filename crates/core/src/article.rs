//! Article field derivations and validation rules.
//!
//! The snippet, truncation, and tag-join behaviors are plain functions so
//! they apply identically to unsaved drafts and fetched rows. Validation is
//! a separate step from persistence: callers validate a draft, then hand the
//! accepted fields to the data-access layer.

use serde::Deserialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of leading content characters included in a snippet.
pub const SNIPPET_CHARS: usize = 23;

// ---------------------------------------------------------------------------
// Field derivations
// ---------------------------------------------------------------------------

/// Derive the preview snippet: the first [`SNIPPET_CHARS`] characters of the
/// content followed by `"..."`.
///
/// Absent content yields an empty string rather than an error, so callers can
/// render partially built drafts.
pub fn snippet(content: Option<&str>) -> String {
    match content {
        None => String::new(),
        Some(text) => {
            let head: String = text.chars().take(SNIPPET_CHARS).collect();
            format!("{head}...")
        }
    }
}

/// Keep the first `len` characters of `content`.
///
/// `len` may exceed the content length (the content is returned unchanged)
/// or be 0 (empty string). Counted in characters, not bytes.
pub fn truncate(content: &str, len: usize) -> String {
    content.chars().take(len).collect()
}

/// External form of the tag sequence: elements joined with `", "`.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

// ---------------------------------------------------------------------------
// Draft + validation
// ---------------------------------------------------------------------------

/// An article that has been built but not persisted.
///
/// Doubles as the create request payload. Fields are optional because a
/// draft may be inspected (snippet, truncation) before it is complete;
/// [`ArticleDraft::validate`] is the gate in front of persistence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ArticleDraft {
    /// Validate the draft, returning `(title, content)` when acceptable.
    ///
    /// Rules:
    /// - `content` must be present (the store column is not nullable)
    /// - `title` must be present and non-blank
    pub fn validate(&self) -> Result<(&str, &str), CoreError> {
        let content = self
            .content
            .as_deref()
            .ok_or_else(|| CoreError::Validation("content cannot be null".into()))?;

        let title = self.title.as_deref().unwrap_or("");
        if title.trim().is_empty() {
            return Err(CoreError::Validation("title must not be empty".into()));
        }

        Ok((title, content))
    }

    /// Preview snippet of the current in-memory content.
    pub fn snippet(&self) -> String {
        snippet(self.content.as_deref())
    }

    /// Shorten the in-memory content to its first `len` characters.
    pub fn truncate(&mut self, len: usize) {
        if let Some(content) = self.content.take() {
            self.content = Some(truncate(&content, len));
        }
    }
}
