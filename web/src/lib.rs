//! Axum shell for the hx-todo application.
//!
//! The server renders HTML fragments and lets htmx swap them into the page,
//! so every handler answers with markup rather than JSON.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         HTTP layer (Axum)               │  ← routing, form/path parsing
//! │  - handlers::todos / handlers::health   │  ← correlation ids, tracing
//! │  - views (pure HTML rendering)          │  ← metrics
//! ├─────────────────────────────────────────┤
//! │         TodoStore (hx-todo-core)        │
//! │  - PostgresTodoStore in production      │  ← single-statement queries
//! │  - InMemoryTodoStore in tests           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives and gets a correlation id
//! 2. **Extract** form fields or the path id, rejecting bad input early
//! 3. **Query** the store
//! 4. **Render** the affected fragment
//! 5. **Return** HTML for htmx to swap
//!
//! # Example
//!
//! ```ignore
//! use hx_todo_postgres::{PostgresConfig, PostgresTodoStore};
//! use hx_todo_web::{build_router, AppState};
//!
//! let store = PostgresTodoStore::connect(&PostgresConfig::new(url)).await?;
//! let app = build_router(AppState::new(store));
//! axum::serve(listener, app).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod router;
pub mod state;
pub mod views;

// Re-export key types for convenience
pub use config::{Config, MetricsConfig, ServerConfig};
pub use error::AppError;
pub use extractors::TodoIdPath;
pub use middleware::{CORRELATION_ID_HEADER, CorrelationId, correlation_id_layer};
pub use router::build_router;
pub use state::AppState;
