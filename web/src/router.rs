//! Router configuration.
//!
//! Builds the complete Axum router with all endpoints.

use crate::handlers::{
    create_todo, delete_todo, get_shell, health_check, list_todos, readiness_check, toggle_todo,
};
use crate::middleware::correlation_id_layer;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};
use hx_todo_core::TodoStore;
use tower_http::trace::TraceLayer;

/// Build the complete Axum router.
///
/// Configures:
/// - The page shell and the todo fragment routes
/// - Health checks
/// - Correlation id and HTTP tracing layers
///
/// # Arguments
///
/// - `state`: Application state to share with handlers
pub fn build_router<S: TodoStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        // Page
        .route("/", get(get_shell))
        // Fragments
        .route("/todos", get(list_todos::<S>).post(create_todo::<S>))
        .route("/todos/toggle/:id", post(toggle_todo::<S>))
        .route("/todos/:id", delete(delete_todo::<S>))
        // Health checks
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check::<S>))
        // Outermost last, so the trace span nests inside the correlation span
        .layer(TraceLayer::new_for_http())
        .layer(correlation_id_layer())
        .with_state(state)
}
