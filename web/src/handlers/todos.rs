//! Todo endpoints.
//!
//! Every endpoint answers with an HTML fragment for htmx to swap:
//! - GET / - Page shell with an empty region that loads the list
//! - GET /todos - All rows followed by the creation form
//! - POST /todos - The new row (inserted before the form)
//! - POST /todos/toggle/:id - The updated row (replaces the old one)
//! - DELETE /todos/:id - Empty body (the row is swapped for nothing)

use crate::error::AppError;
use crate::extractors::TodoIdPath;
use crate::metrics;
use crate::state::AppState;
use crate::views;
use axum::{Form, extract::State, http::StatusCode, response::Html};
use hx_todo_core::{TodoContent, TodoError, TodoStore};
use serde::Deserialize;

// ============================================================================
// Request Types
// ============================================================================

/// Form body of a create request.
#[derive(Debug, Deserialize)]
pub struct CreateTodoForm {
    /// Todo text; a missing field counts as empty.
    #[serde(default)]
    pub content: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Serve the page shell.
///
/// The list itself arrives on the region's `load` trigger.
#[allow(clippy::unused_async)]
pub async fn get_shell() -> Html<String> {
    Html(views::render_shell(&views::todo_region()))
}

/// Render every todo followed by the creation form.
///
/// # Errors
///
/// Returns 500 if the store cannot be read.
#[tracing::instrument(skip(state))]
pub async fn list_todos<S: TodoStore>(
    State(state): State<AppState<S>>,
) -> Result<Html<String>, AppError> {
    let todos = state.store().list_all().await?;
    tracing::debug!(count = todos.len(), "Listed todos");
    Ok(Html(views::render_list(&todos)))
}

/// Create a todo and render its row.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:3000/todos -d 'content=Buy milk'
/// ```
///
/// # Errors
///
/// Returns 422 if `content` is empty (nothing is written), 500 if the
/// insert fails.
#[tracing::instrument(skip(state, form))]
pub async fn create_todo<S: TodoStore>(
    State(state): State<AppState<S>>,
    Form(form): Form<CreateTodoForm>,
) -> Result<Html<String>, AppError> {
    let content = TodoContent::parse(&form.content).inspect_err(|_| {
        metrics::record_validation_failure();
    })?;

    let todo = state.store().insert(&content).await?;
    metrics::record_created();
    tracing::info!(id = %todo.id, "Todo created");

    Ok(Html(views::render_item(&todo)))
}

/// Flip a todo's completion flag and render the updated row.
///
/// # Errors
///
/// Returns 400 for a malformed id, 404 if no todo has this id (htmx leaves
/// the row untouched), 500 if the update fails.
#[tracing::instrument(skip(state))]
pub async fn toggle_todo<S: TodoStore>(
    State(state): State<AppState<S>>,
    TodoIdPath(id): TodoIdPath,
) -> Result<Html<String>, AppError> {
    let todo = state
        .store()
        .toggle(id)
        .await?
        .ok_or(TodoError::NotFound(id))?;

    metrics::record_toggled();
    tracing::info!(%id, completed = todo.completed, "Todo toggled");

    Ok(Html(views::render_item(&todo)))
}

/// Delete a todo.
///
/// Answers 200 with an empty body whether or not the todo existed; htmx
/// ignores 204 responses, so an empty 200 is what removes the row.
///
/// # Errors
///
/// Returns 400 for a malformed id, 500 if the delete fails.
#[tracing::instrument(skip(state))]
pub async fn delete_todo<S: TodoStore>(
    State(state): State<AppState<S>>,
    TodoIdPath(id): TodoIdPath,
) -> Result<(StatusCode, Html<&'static str>), AppError> {
    if state.store().delete_by_id(id).await? {
        metrics::record_deleted();
        tracing::info!(%id, "Todo deleted");
    } else {
        tracing::debug!(%id, "Delete of unknown todo ignored");
    }

    Ok((StatusCode::OK, Html("")))
}
