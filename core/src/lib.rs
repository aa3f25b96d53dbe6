//! # hx-todo Core
//!
//! Domain types and the storage contract for the hx-todo application.
//!
//! This crate has no I/O of its own. It defines:
//!
//! - [`Todo`]: the only entity (`id`, `content`, `completed`)
//! - [`TodoId`]: storage-assigned identifier, parsed strictly from path text
//! - [`TodoContent`]: validated, non-empty creation input
//! - [`TodoError`]: the error taxonomy shared by storage and handlers
//! - [`TodoStore`]: the Storage Adapter trait implemented by
//!   `hx-todo-postgres` (production) and `hx-todo-testing` (in-memory)
//!
//! ## Example
//!
//! ```
//! use hx_todo_core::{TodoContent, TodoError, TodoId};
//!
//! let content = TodoContent::parse("  Buy milk ").unwrap();
//! assert_eq!(content.as_str(), "Buy milk");
//!
//! assert!(matches!(TodoContent::parse("   "), Err(TodoError::EmptyContent)));
//! assert!("42".parse::<TodoId>().is_ok());
//! assert!("abc".parse::<TodoId>().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;
pub mod todo;

pub use error::{Result, TodoError};
pub use store::TodoStore;
pub use todo::{Todo, TodoContent, TodoId};
