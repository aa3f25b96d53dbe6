//! Connection pool settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// `PostgreSQL` configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostgresConfig {
    /// `PostgreSQL` connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of idle connections in the pool
    pub min_connections: u32,
    /// Connection acquire timeout in seconds
    pub connect_timeout: u64,
    /// Idle timeout in seconds (connections idle longer than this are closed)
    pub idle_timeout: u64,
}

impl PostgresConfig {
    /// Settings with pool defaults for the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: 30,
            idle_timeout: 600,
        }
    }

    /// Acquire timeout as a [`Duration`].
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    /// Idle timeout as a [`Duration`].
    #[must_use]
    pub const fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout)
    }

    /// The URL with credentials and query parameters stripped, safe for logs.
    ///
    /// Both the `user:password@` prefix and `?password=...` style parameters
    /// can carry secrets.
    #[must_use]
    pub fn redacted_url(&self) -> &str {
        let without_query = self.url.split('?').next().unwrap_or_default();
        without_query.rsplit('@').next().unwrap_or("unknown")
    }
}
