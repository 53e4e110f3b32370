//! User model and DTOs.
//!
//! Users exist to be referenced by an article's `author` association; they
//! carry no behavior beyond storage.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gazette_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: Option<String>,
}
