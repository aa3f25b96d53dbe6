//! Storage Adapter trait for todo persistence.
//!
//! # Implementations
//!
//! - `PostgresTodoStore` (in `hx-todo-postgres`): Production implementation
//! - `InMemoryTodoStore` (in `hx-todo-testing`): Fast, deterministic testing
//!
//! # Atomicity
//!
//! Every method is a single write or read against the backing store. In
//! particular `toggle` must flip the flag in one conditional update (or
//! under one lock), never as a separate read followed by a write, so that
//! concurrent toggles cannot lose an update.
//!
//! # Example
//!
//! ```no_run
//! use hx_todo_core::{Result, TodoContent, TodoStore};
//!
//! async fn example<S: TodoStore>(store: &S) -> Result<()> {
//!     let todo = store.insert(&TodoContent::parse("Buy milk")?).await?;
//!     store.toggle(todo.id).await?;
//!     store.delete_by_id(todo.id).await?;
//!     assert!(store.list_all().await?.is_empty());
//!     Ok(())
//! }
//! ```

use crate::error::Result;
use crate::todo::{Todo, TodoContent, TodoId};
use std::future::Future;

/// Typed query operations over the single todo table.
///
/// Implementations must be `Send + Sync` so one handle can be shared by all
/// request handlers.
pub trait TodoStore: Send + Sync {
    /// Returns every stored todo in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`](crate::TodoError::Storage) if the query fails.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Todo>>> + Send;

    /// Persists a new todo with a fresh id and `completed = false`.
    ///
    /// Ids come from a strictly increasing sequence owned by the store;
    /// they are never derived from the current row count.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`](crate::TodoError::Storage) if the write fails.
    fn insert(&self, content: &TodoContent) -> impl Future<Output = Result<Todo>> + Send;

    /// Point lookup by id.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`](crate::TodoError::Storage) if the query fails.
    fn get_by_id(&self, id: TodoId) -> impl Future<Output = Result<Option<Todo>>> + Send;

    /// Flips `completed` on the matching todo and returns the updated record.
    ///
    /// Returns `Ok(None)` if no todo has this id; nothing else is touched.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`](crate::TodoError::Storage) if the write fails.
    fn toggle(&self, id: TodoId) -> impl Future<Output = Result<Option<Todo>>> + Send;

    /// Removes the todo if present.
    ///
    /// Returns `true` when a row was removed. A missing id is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`](crate::TodoError::Storage) if the write fails.
    fn delete_by_id(&self, id: TodoId) -> impl Future<Output = Result<bool>> + Send;

    /// Cheap connectivity probe for readiness checks.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`](crate::TodoError::Storage) if the store is unreachable.
    fn ping(&self) -> impl Future<Output = Result<()>> + Send;
}
