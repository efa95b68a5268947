//! Roommates Store - SQLite data access for chores and roommates
//!
//! Provides:
//! - `ConnectionProvider`, which opens a fresh connection per call
//! - `ChoreRepository` (list, lookup, insert) and `RoommateRepository` (lookup)
//! - Classification of SQLite failures into the core error taxonomy
//! - An idempotent schema bootstrap for new databases

pub mod config;
pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;

// Re-export key types
pub use config::StoreConfig;
pub use db::ConnectionProvider;
pub use errors::Result;
pub use repo::{ChoreRepository, RoommateRepository};
