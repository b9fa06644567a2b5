//! Store configuration.

use std::path::PathBuf;

use amity_core::constants::MAX_POOL_CONNECTIONS;

/// Configuration for [`SqliteSocialGraph`](crate::SqliteSocialGraph).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Database file path. `None` opens an in-memory database.
    pub path: Option<PathBuf>,
    /// Maximum pool connections, clamped to [`MAX_POOL_CONNECTIONS`].
    pub max_connections: u32,
}

impl StoreConfig {
    /// Configuration for an on-disk database at `path`.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            path: Some(path.into()),
            ..StoreConfig::default()
        }
    }

    /// Configuration for an in-memory database.
    pub fn in_memory() -> Self {
        StoreConfig::default()
    }

    /// Effective pool size after applying bounds.
    ///
    /// An in-memory SQLite database is private to each connection, so a
    /// memory-backed pool must hold exactly one connection to see a
    /// single database.
    pub fn effective_max_connections(&self) -> u32 {
        if self.path.is_none() {
            return 1;
        }
        self.max_connections.clamp(1, MAX_POOL_CONNECTIONS)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            path: None,
            max_connections: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_pool_is_single_connection() {
        let config = StoreConfig::in_memory();
        assert_eq!(config.effective_max_connections(), 1);
    }

    #[test]
    fn on_disk_pool_respects_bounds() {
        let mut config = StoreConfig::at_path("/tmp/amity.db");
        assert_eq!(config.effective_max_connections(), 5);

        config.max_connections = 0;
        assert_eq!(config.effective_max_connections(), 1);

        config.max_connections = 10_000;
        assert_eq!(config.effective_max_connections(), MAX_POOL_CONNECTIONS);
    }
}
