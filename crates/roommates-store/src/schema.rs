//! Schema bootstrap
//!
//! Creates the Room, Roommate and Chore tables when they are missing. The
//! script is embedded at compile time and every statement is
//! `IF NOT EXISTS`, so running it against a populated database is a no-op.
//! There is no versioning and no upgrade path.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use tracing::debug;

/// Embedded DDL for the three tables
pub const SCHEMA_SQL: &str = include_str!("../schema/roommates.sql");

/// Tables created by [`ensure_schema`], in dependency order
pub const TABLES: [&str; 3] = ["Room", "Roommate", "Chore"];

/// Create any missing tables
///
/// # Errors
///
/// `Persistence` if the script fails, e.g. on a read-only database.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL).map_err(from_rusqlite)?;
    debug!(tables = TABLES.len(), "schema ensured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<String>, _>>()
            .unwrap()
    }

    #[test]
    fn test_ensure_schema_creates_tables() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();

        let tables = table_names(&conn);
        for expected in TABLES {
            assert!(
                tables.contains(&expected.to_string()),
                "Missing table: {}",
                expected
            );
        }
    }

    #[test]
    fn test_ensure_schema_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn.execute("INSERT INTO Chore (Name) VALUES ('Dishes')", [])
            .unwrap();

        ensure_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM Chore", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1, "Re-running the bootstrap must keep existing rows");
    }
}
