use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::hash_password;
use crate::db::models::{Comment, User};
use crate::error::AppError;

/// Persistence boundary for users and comments.
///
/// Handlers hold this as a trait object so tests can substitute an
/// in-memory or mock implementation without a running Postgres.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    /// Single-row lookup. Not-found is `Ok(None)`, a normal outcome;
    /// only transport-level failures become errors.
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Appends a user row. Duplicate usernames are not prevented here.
    async fn insert_user(&self, username: &str, password_hash: &str) -> Result<(), AppError>;

    /// All comments in creation order. An empty store yields an empty vec.
    async fn list_comments(&self) -> Result<Vec<Comment>, AppError>;

    /// Inserts one comment. Zero affected rows is a `BadRequest`; an
    /// unreachable store or failed query is a `ServerError`.
    async fn create_comment(&self, username: &str, body: &str) -> Result<Comment, AppError>;

    /// True iff exactly one row was removed. Store failures are absorbed
    /// into `false`; callers deliberately cannot observe them.
    async fn delete_comment(&self, id: Uuid) -> bool;

    /// Creates the schema if missing, then wipes and seeds demo data.
    async fn setup(&self) -> Result<(), AppError>;

    async fn close(&self) {}
}

pub struct PgStore {
    pool: Arc<PgPool>,
}

impl PgStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub async fn connect(
        url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(url)
            .await?;

        Ok(Self { pool: Arc::new(pool) })
    }
}

#[async_trait]
impl Store for PgStore {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password AS password_hash FROM users WHERE username = $1 LIMIT 1",
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn insert_user(&self, username: &str, password_hash: &str) -> Result<(), AppError> {
        sqlx::query("INSERT INTO users (id, username, password) VALUES ($1, $2, $3)")
            .bind(Uuid::new_v4())
            .bind(username)
            .bind(password_hash)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn list_comments(&self) -> Result<Vec<Comment>, AppError> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT id, username, body, created_on FROM comments ORDER BY created_on",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(comments)
    }

    async fn create_comment(&self, username: &str, body: &str) -> Result<Comment, AppError> {
        let comment = Comment::new(username.to_string(), body.to_string());

        let result = sqlx::query(
            "INSERT INTO comments (id, username, body, created_on) VALUES ($1, $2, $3, $4)",
        )
        .bind(comment.id)
        .bind(&comment.username)
        .bind(&comment.body)
        .bind(comment.created_on)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| AppError::ServerError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AppError::BadRequest("Unable to save comment".to_string()));
        }

        Ok(comment)
    }

    async fn delete_comment(&self, id: Uuid) -> bool {
        match sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
        {
            Ok(result) => result.rows_affected() == 1,
            Err(e) => {
                warn!("Failed to delete comment {}: {}", id, e);
                false
            }
        }
    }

    async fn setup(&self) -> Result<(), AppError> {
        info!("Setting up database schema and seed data");

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL
            )",
        )
        .execute(self.pool.as_ref())
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS comments (
                id UUID PRIMARY KEY,
                username TEXT NOT NULL,
                body TEXT NOT NULL,
                created_on TIMESTAMPTZ NOT NULL
            )",
        )
        .execute(self.pool.as_ref())
        .await?;

        sqlx::query("DELETE FROM comments").execute(self.pool.as_ref()).await?;
        sqlx::query("DELETE FROM users").execute(self.pool.as_ref()).await?;

        for (username, password) in [
            ("admin", "!!SuperSecretAdmin!!"),
            ("alice", "AlicePassword!"),
            ("bob", "BobPassword!"),
            ("eve", "$EVELknev^l"),
            ("rick", "!GetSchwifty!"),
        ] {
            self.insert_user(username, &hash_password(password)).await?;
        }

        self.create_comment("rick", "cool dog m8").await?;
        self.create_comment("alice", "OMG so cute :)").await?;

        info!("Database seeded with demo users and comments");
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
