//! Store configuration
//!
//! The only setting this layer needs is the connection string: a SQLite
//! file path or a `file:` URI.

use crate::errors::{invalid_config, Result};
use roommates_core_types::Sensitive;
use std::env::VarError;

/// Environment variable consulted by [`StoreConfig::from_env`]
pub const DB_ENV_VAR: &str = "ROOMMATES_DB";

/// Database file used when `ROOMMATES_DB` is unset
pub const DEFAULT_DB_PATH: &str = "roommates.db";

/// Configuration for the data-access layer
#[derive(Debug, Clone)]
pub struct StoreConfig {
    connection_string: Sensitive<String>,
}

impl StoreConfig {
    /// Build a config from an explicit connection string
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the connection string is empty or whitespace.
    pub fn new(connection_string: impl Into<String>) -> Result<Self> {
        let connection_string = connection_string.into();
        if connection_string.trim().is_empty() {
            return Err(invalid_config("connection string must not be empty"));
        }
        Ok(Self {
            connection_string: Sensitive::new(connection_string),
        })
    }

    /// Read the connection string from `ROOMMATES_DB`, falling back to
    /// `roommates.db` in the working directory
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `ROOMMATES_DB` is set but empty or not valid Unicode.
    pub fn from_env() -> Result<Self> {
        match std::env::var(DB_ENV_VAR) {
            Ok(value) => Self::new(value),
            Err(VarError::NotPresent) => Self::new(DEFAULT_DB_PATH),
            Err(VarError::NotUnicode(_)) => Err(invalid_config(&format!(
                "{} is not valid Unicode",
                DB_ENV_VAR
            ))),
        }
    }

    /// The raw connection string
    pub fn connection_string(&self) -> &str {
        self.connection_string.expose()
    }
}
