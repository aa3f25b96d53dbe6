//! In-memory store doubles
//!
//! Provides fast, deterministic stand-ins for the production store:
//! - [`InMemoryTodoStore`]: `Vec`-backed store with a monotonic id counter
//! - [`FailingTodoStore`]: every call fails, for error-path tests

use hx_todo_core::{Result, Todo, TodoContent, TodoError, TodoId, TodoStore};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug)]
struct Inner {
    todos: Vec<Todo>,
    next_id: i64,
}

/// In-memory todo store for fast, deterministic testing.
///
/// Ids start at 1 and only ever increase, matching the `BIGSERIAL`
/// behavior of the `PostgreSQL` store. Every operation holds the lock for
/// its whole read-modify-write, so concurrent calls never interleave.
///
/// # Example
///
/// ```
/// use hx_todo_core::{TodoContent, TodoId, TodoStore};
/// use hx_todo_testing::InMemoryTodoStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = InMemoryTodoStore::new();
///
/// let todo = store.insert(&TodoContent::parse("Buy milk")?).await?;
/// assert_eq!(todo.id, TodoId::new(1));
///
/// store.delete_by_id(todo.id).await?;
/// let next = store.insert(&TodoContent::parse("Buy eggs")?).await?;
/// assert_eq!(next.id, TodoId::new(2));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct InMemoryTodoStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryTodoStore {
    /// Create a new empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                todos: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Remove all todos (for test isolation)
    ///
    /// The id counter is kept, so ids handed out after a clear are still
    /// fresh.
    pub async fn clear(&self) {
        self.inner.lock().await.todos.clear();
    }

    /// Number of stored todos
    pub async fn len(&self) -> usize {
        self.inner.lock().await.todos.len()
    }

    /// Check if the store is empty
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.todos.is_empty()
    }
}

impl Default for InMemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore for InMemoryTodoStore {
    async fn list_all(&self) -> Result<Vec<Todo>> {
        Ok(self.inner.lock().await.todos.clone())
    }

    async fn insert(&self, content: &TodoContent) -> Result<Todo> {
        let mut inner = self.inner.lock().await;
        let id = TodoId::new(inner.next_id);
        inner.next_id += 1;

        let todo = Todo::new(id, content.clone());
        inner.todos.push(todo.clone());
        Ok(todo)
    }

    async fn get_by_id(&self, id: TodoId) -> Result<Option<Todo>> {
        let inner = self.inner.lock().await;
        Ok(inner.todos.iter().find(|t| t.id == id).cloned())
    }

    async fn toggle(&self, id: TodoId) -> Result<Option<Todo>> {
        let mut inner = self.inner.lock().await;
        Ok(inner.todos.iter_mut().find(|t| t.id == id).map(|todo| {
            todo.completed = !todo.completed;
            todo.clone()
        }))
    }

    async fn delete_by_id(&self, id: TodoId) -> Result<bool> {
        let mut inner = self.inner.lock().await;
        let before = inner.todos.len();
        inner.todos.retain(|t| t.id != id);
        Ok(inner.todos.len() < before)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// Store whose every operation fails with [`TodoError::Storage`].
///
/// Useful for asserting that storage outages surface as server errors.
#[derive(Clone, Debug, Default)]
pub struct FailingTodoStore;

impl FailingTodoStore {
    /// Create a new failing store
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn failure() -> TodoError {
        TodoError::Storage("store unavailable".to_string())
    }
}

impl TodoStore for FailingTodoStore {
    async fn list_all(&self) -> Result<Vec<Todo>> {
        Err(Self::failure())
    }

    async fn insert(&self, _content: &TodoContent) -> Result<Todo> {
        Err(Self::failure())
    }

    async fn get_by_id(&self, _id: TodoId) -> Result<Option<Todo>> {
        Err(Self::failure())
    }

    async fn toggle(&self, _id: TodoId) -> Result<Option<Todo>> {
        Err(Self::failure())
    }

    async fn delete_by_id(&self, _id: TodoId) -> Result<bool> {
        Err(Self::failure())
    }

    async fn ping(&self) -> Result<()> {
        Err(Self::failure())
    }
}
