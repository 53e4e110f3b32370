//! Repository for the `users` table.

use sqlx::PgPool;

use gazette_core::types::DbId;

use crate::models::user::{CreateUser, User};

/// Column list for `users` queries.
const USER_COLUMNS: &str = "id, name, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name) \
             VALUES ($1) \
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(input.name.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Find a user by their ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Remove every user, cascading to tables that reference them.
    /// Used to reset state between test specs.
    pub async fn truncate_all(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query("TRUNCATE users CASCADE").execute(pool).await?;
        Ok(())
    }
}
