//! Domain types for the todo list.
//!
//! A todo list is a single table of items. Each item is created with a
//! storage-assigned id, can have its `completed` flag flipped, and can be
//! removed. Content never changes after creation.

use crate::error::TodoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a todo item.
///
/// Ids are assigned by the store from a strictly increasing sequence and are
/// never reused, even after the todo they named has been deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// Creates a `TodoId` from a raw storage value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw storage value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a path segment into an id.
///
/// Only plain base-10 digits describing a positive `i64` are accepted: no
/// sign, no whitespace, no zero.
impl FromStr for TodoId {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TodoError::MalformedId { raw: s.to_string() };

        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(malformed()),
        }
    }
}

/// Validated content for a new todo.
///
/// The only way to build one is [`TodoContent::parse`], so a `&TodoContent`
/// handed to a store is always non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoContent(String);

impl TodoContent {
    /// Validates raw form input.
    ///
    /// The text is kept exactly as submitted; only the empty string is
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::EmptyContent`] if `raw` is empty.
    pub fn parse(raw: &str) -> Result<Self, TodoError> {
        if raw.is_empty() {
            return Err(TodoError::EmptyContent);
        }
        Ok(Self(raw.to_string()))
    }

    /// Returns the validated text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper, returning the validated text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A single stored todo item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Storage-assigned identifier
    pub id: TodoId,
    /// Display text
    pub content: String,
    /// Whether the todo is done
    pub completed: bool,
}

impl Todo {
    /// Creates a freshly inserted todo (not completed).
    #[must_use]
    pub fn new(id: TodoId, content: TodoContent) -> Self {
        Self {
            id,
            content: content.into_inner(),
            completed: false,
        }
    }
}
