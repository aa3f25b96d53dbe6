//! Error types for todo operations.

use crate::todo::TodoId;
use thiserror::Error;

/// Result type alias for todo operations.
pub type Result<T> = std::result::Result<T, TodoError>;

/// Everything that can go wrong between a request and the todo table.
///
/// Storage and rendering never format user-facing errors themselves; the
/// web layer maps each variant to an HTTP status at the handler boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// Creation input was the empty string.
    #[error("Todo content cannot be empty")]
    EmptyContent,

    /// A path parameter did not hold a positive integer id.
    #[error("Malformed todo id: {raw:?}")]
    MalformedId {
        /// The raw text that failed to parse
        raw: String,
    },

    /// No todo with this id is currently stored.
    #[error("Todo with id {0} not found")]
    NotFound(TodoId),

    /// The backing store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}
