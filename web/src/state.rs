//! Application state for Axum handlers.
//!
//! Handlers never reach for global state: the store handle travels with the
//! router as `State<AppState<S>>`, where `S` is any [`TodoStore`].

use hx_todo_core::TodoStore;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Cloned per request; the store itself sits behind an `Arc`.
///
/// # Examples
///
/// ```ignore
/// use hx_todo_testing::InMemoryTodoStore;
/// use hx_todo_web::{build_router, AppState};
///
/// let app = build_router(AppState::new(InMemoryTodoStore::new()));
/// ```
pub struct AppState<S> {
    store: Arc<S>,
}

impl<S: TodoStore> AppState<S> {
    /// Create a new application state owning `store`.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// The todo store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

// Manual impl: deriving would demand `S: Clone`.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
