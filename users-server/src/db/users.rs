//! Users repository
//!
//! [`UserStore`] is what handlers and resolvers depend on; [`UserRepo`] is the
//! PostgreSQL implementation over the shared [`Database`] pool.

use async_trait::async_trait;

use super::Database;
use crate::models::{NewUser, PageRequest, User};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Read and create operations on the `users` table.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Round-trip to the backing database.
    async fn ping(&self) -> Result<(), DbError>;

    /// One page of users, ascending by id.
    async fn list_page(&self, page: PageRequest) -> Result<Vec<User>, DbError>;

    /// Total number of users.
    async fn count(&self) -> Result<i64, DbError>;

    /// Every user, ascending by id.
    async fn list_all(&self) -> Result<Vec<User>, DbError>;

    /// A single user; [`DbError::NotFound`] when absent.
    async fn get(&self, id: i32) -> Result<User, DbError>;

    /// Insert a user and return it with its assigned id.
    async fn create(&self, new_user: &NewUser) -> Result<User, DbError>;
}

/// PostgreSQL users repository
#[derive(Debug, Clone)]
pub struct UserRepo {
    db: Database,
}

impl UserRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for UserRepo {
    async fn ping(&self) -> Result<(), DbError> {
        self.db.ping().await
    }

    async fn list_page(&self, page: PageRequest) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.db.pool())
        .await?;

        Ok(users)
    }

    async fn count(&self) -> Result<i64, DbError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(self.db.pool())
            .await?;

        Ok(total)
    }

    async fn list_all(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY id ASC")
            .fetch_all(self.db.pool())
            .await?;

        Ok(users)
    }

    async fn get(&self, id: i32) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1 LIMIT 1")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "user",
                id: id.to_string(),
            })
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, DbError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(new_user.name.as_deref())
        .bind(new_user.email.as_deref())
        .fetch_one(self.db.pool())
        .await?;

        tracing::debug!(user_id = user.id, "User inserted");
        Ok(user)
    }
}
