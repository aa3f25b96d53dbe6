//! Operation metrics.
//!
//! # Exported Metrics
//!
//! - `hx_todo_todos_total{operation}` - Successful writes by operation
//!   (`created`, `toggled`, `deleted`)
//! - `hx_todo_validation_failures_total` - Create requests rejected for
//!   empty content
//!
//! Without an installed recorder these calls are no-ops, so handlers and
//! tests can record unconditionally.

use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Register metric descriptions. Call once at startup.
pub fn register_metrics() {
    describe_counter!(
        "hx_todo_todos_total",
        "Total number of successful todo writes by operation (created, toggled, deleted)"
    );
    describe_counter!(
        "hx_todo_validation_failures_total",
        "Total number of create requests rejected for empty content"
    );

    tracing::info!("Metrics registered");
}

/// Install the Prometheus exporter, serving `/metrics` on `addr`.
///
/// # Errors
///
/// Returns an error if the recorder is already installed or the listener
/// cannot bind.
pub fn install_prometheus_exporter(addr: SocketAddr) -> anyhow::Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;
    tracing::info!(%addr, "Prometheus exporter listening");
    Ok(())
}

/// Record a created todo.
pub fn record_created() {
    metrics::counter!("hx_todo_todos_total", "operation" => "created").increment(1);
}

/// Record a toggled todo.
pub fn record_toggled() {
    metrics::counter!("hx_todo_todos_total", "operation" => "toggled").increment(1);
}

/// Record a deleted todo (only when a row was actually removed).
pub fn record_deleted() {
    metrics::counter!("hx_todo_todos_total", "operation" => "deleted").increment(1);
}

/// Record a create rejected for empty content.
pub fn record_validation_failure() {
    metrics::counter!("hx_todo_validation_failures_total").increment(1);
}
