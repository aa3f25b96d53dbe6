//! HTTP request handlers.
//!
//! - [`todos`]: the htmx fragment endpoints
//! - [`health`]: liveness and readiness probes

pub mod health;
pub mod todos;

pub use health::{health_check, readiness_check};
pub use todos::{create_todo, delete_todo, get_shell, list_todos, toggle_todo};
