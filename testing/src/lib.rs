//! # hx-todo Testing
//!
//! Testing utilities and helpers for hx-todo.
//!
//! This crate provides:
//! - In-memory implementations of the `TodoStore` trait
//! - Seeding helpers
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```ignore
//! use hx_todo_testing::{helpers::seed, InMemoryTodoStore};
//!
//! #[tokio::test]
//! async fn test_list_fragment() {
//!     let store = InMemoryTodoStore::new();
//!     seed(&store, &["Buy milk", "Walk dog"]).await;
//!
//!     let todos = store.list_all().await.unwrap();
//!     assert_eq!(todos.len(), 2);
//! }
//! ```

pub mod store_mocks;

/// Test helpers and utilities.
pub mod helpers {
    use hx_todo_core::{Todo, TodoContent, TodoStore};

    /// Insert one todo per entry, in order, returning the stored records.
    ///
    /// # Panics
    ///
    /// Panics if an entry is empty or the store rejects the insert; both
    /// mean the test itself is broken.
    #[allow(clippy::expect_used)]
    pub async fn seed<S: TodoStore>(store: &S, contents: &[&str]) -> Vec<Todo> {
        let mut todos = Vec::with_capacity(contents.len());
        for text in contents {
            let content = TodoContent::parse(text).expect("seed content must not be empty");
            todos.push(store.insert(&content).await.expect("seed insert failed"));
        }
        todos
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// Content that survives validation: any non-empty text, including
    /// surrounding or whitespace-only input.
    pub fn valid_content() -> impl Strategy<Value = String> {
        "[ \tA-Za-z0-9,.!?<>&-]{1,40}"
    }
}

// Re-export commonly used items
pub use store_mocks::{FailingTodoStore, InMemoryTodoStore};
