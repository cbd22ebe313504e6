//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address, phone_number, email, password_hash, created_at";

/// Provides insert and email lookup for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, address, phone_number, email, password_hash)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.phone_number)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// All users registered with `email` (case-sensitive), oldest first.
    ///
    /// Email is not unique, so this may return several rows.
    pub async fn list_by_email(pool: &PgPool, email: &str) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1 ORDER BY id");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_all(pool)
            .await
    }
}
