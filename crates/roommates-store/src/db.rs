//! Database connection management
//!
//! A `ConnectionProvider` owns the connection string and nothing else. It
//! hands out a freshly opened `Connection` on every call; the caller owns
//! that handle and SQLite closes it when it is dropped.

use crate::config::StoreConfig;
use crate::errors::{connection_error, Result};
use roommates_core_types::Sensitive;
use rusqlite::Connection;
use tracing::debug;

/// Produces one new connection per call from a fixed connection string
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    connection_string: Sensitive<String>,
}

impl ConnectionProvider {
    /// Create a provider for the given SQLite path or `file:` URI
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: Sensitive::new(connection_string.into()),
        }
    }

    /// Create a provider from a validated store configuration
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.connection_string())
    }

    /// Open a new, configured connection
    ///
    /// Every call opens its own connection; nothing is pooled or reused.
    ///
    /// # Errors
    ///
    /// `Connection` if the database cannot be opened or configured.
    pub fn new_connection(&self) -> Result<Connection> {
        let conn = Connection::open(self.connection_string.expose()).map_err(connection_error)?;
        configure(&conn)?;
        debug!("opened sqlite connection");
        Ok(conn)
    }
}

/// Configure a connection with the settings every repository relies on
fn configure(conn: &Connection) -> Result<()> {
    // Enforce Roommate.RoomId -> Room.Id
    conn.execute_batch("PRAGMA foreign_keys = ON")
        .map_err(connection_error)?;

    Ok(())
}
