//! `PostgreSQL` todo store for hx-todo.
//!
//! This crate provides the production implementation of the `TodoStore`
//! trait from `hx-todo-core`. It uses sqlx with a connection pool and
//! supports:
//!
//! - Store-generated, strictly increasing ids (`BIGSERIAL`)
//! - Single-statement writes (`INSERT ... RETURNING`, `UPDATE ... RETURNING`)
//! - Embedded migrations
//!
//! # Example
//!
//! ```no_run
//! use hx_todo_core::{TodoContent, TodoStore};
//! use hx_todo_postgres::{PostgresConfig, PostgresTodoStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PostgresTodoStore::connect(&PostgresConfig::new("postgres://localhost/hx_todo")).await?;
//! store.migrate().await?;
//!
//! let todo = store.insert(&TodoContent::parse("Buy milk")?).await?;
//! assert!(!todo.completed);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;

pub use config::PostgresConfig;

use hx_todo_core::{Result, Todo, TodoContent, TodoError, TodoId, TodoStore};
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Row shape of the `todos` table.
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id: i64,
    content: String,
    completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Self {
            id: TodoId::new(row.id),
            content: row.content,
            completed: row.completed,
        }
    }
}

/// PostgreSQL-backed todo store.
///
/// Every operation is one SQL statement, so no read-then-write window exists
/// between concurrent requests.
#[derive(Clone, Debug)]
pub struct PostgresTodoStore {
    pool: PgPool,
}

impl PostgresTodoStore {
    /// Creates a store over an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a new pool using the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`] if the database is unreachable.
    #[tracing::instrument(skip(config), fields(database = %config.redacted_url()))]
    pub async fn connect(config: &PostgresConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect(&config.url)
            .await
            .map_err(|e| TodoError::Storage(format!("Failed to connect: {e}")))?;

        tracing::info!("PostgreSQL pool connected");
        Ok(Self::new(pool))
    }

    /// Runs the embedded migrations (creates the `todos` table).
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`] if a migration fails.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| TodoError::Storage(format!("Migration failed: {e}")))?;
        Ok(())
    }
}

impl TodoStore for PostgresTodoStore {
    #[tracing::instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Todo>> {
        let rows: Vec<TodoRow> =
            sqlx::query_as("SELECT id, content, completed FROM todos ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| TodoError::Storage(format!("Failed to list todos: {e}")))?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    #[tracing::instrument(skip(self, content))]
    async fn insert(&self, content: &TodoContent) -> Result<Todo> {
        let row: TodoRow = sqlx::query_as(
            "INSERT INTO todos (content) VALUES ($1)
             RETURNING id, content, completed",
        )
        .bind(content.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TodoError::Storage(format!("Failed to insert todo: {e}")))?;

        tracing::debug!(id = row.id, "Todo inserted");
        Ok(row.into())
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: TodoId) -> Result<Option<Todo>> {
        let row: Option<TodoRow> =
            sqlx::query_as("SELECT id, content, completed FROM todos WHERE id = $1")
                .bind(id.get())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| TodoError::Storage(format!("Failed to get todo: {e}")))?;

        Ok(row.map(Todo::from))
    }

    #[tracing::instrument(skip(self))]
    async fn toggle(&self, id: TodoId) -> Result<Option<Todo>> {
        let row: Option<TodoRow> = sqlx::query_as(
            "UPDATE todos SET completed = NOT completed
             WHERE id = $1
             RETURNING id, content, completed",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TodoError::Storage(format!("Failed to toggle todo: {e}")))?;

        Ok(row.map(Todo::from))
    }

    #[tracing::instrument(skip(self))]
    async fn delete_by_id(&self, id: TodoId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| TodoError::Storage(format!("Failed to delete todo: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| TodoError::Storage(format!("Ping failed: {e}")))?;
        Ok(())
    }
}
