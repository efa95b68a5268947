//! Chore repository
//!
//! Every method opens its own connection and drops it, along with any
//! prepared statement and row cursor, before returning.

use super::elapsed_ms;
use crate::db::ConnectionProvider;
use crate::errors::{from_rusqlite, Result};
use roommates_core::errors::RoommatesError;
use roommates_core::model::Chore;
use roommates_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::{named_params, OptionalExtension, Row};
use std::time::Instant;

pub const SELECT_ALL_CHORES: &str = "SELECT Id, Name FROM Chore";
pub const SELECT_CHORE_BY_ID: &str = "SELECT Name FROM Chore WHERE Id = @id";
pub const INSERT_CHORE: &str = "INSERT INTO Chore (Name) VALUES (@name) RETURNING Id";

/// Read and insert access to the Chore table
#[derive(Debug, Clone)]
pub struct ChoreRepository {
    provider: ConnectionProvider,
}

impl ChoreRepository {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }

    /// Fetch every chore, in whatever order the store returns them
    ///
    /// An empty table yields an empty vector.
    ///
    /// # Errors
    ///
    /// - `Connection`: the database could not be opened
    /// - `Persistence`: the query failed (e.g. missing table)
    pub fn get_all(&self) -> Result<Vec<Chore>> {
        log_op_start!("chore_get_all");
        let start = Instant::now();

        let chores = self.get_all_impl().map_err(|e| {
            log_op_error!("chore_get_all", &e, duration_ms = elapsed_ms(start));
            e
        })?;

        log_op_end!(
            "chore_get_all",
            duration_ms = elapsed_ms(start),
            row_count = chores.len() as u64
        );

        Ok(chores)
    }

    fn get_all_impl(&self) -> Result<Vec<Chore>> {
        let conn = self.provider.new_connection()?;
        let mut stmt = conn.prepare(SELECT_ALL_CHORES).map_err(from_rusqlite)?;

        let chores = stmt
            .query_map([], map_chore)
            .map_err(from_rusqlite)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(from_rusqlite)?;

        Ok(chores)
    }

    /// Fetch a single chore
    ///
    /// Returns `Ok(None)` when no chore has this id.
    ///
    /// # Errors
    ///
    /// - `Connection`: the database could not be opened
    /// - `Persistence`: the query failed
    pub fn get_by_id(&self, id: i32) -> Result<Option<Chore>> {
        log_op_start!("chore_get_by_id", chore_id = id);
        let start = Instant::now();

        let chore = self.get_by_id_impl(id).map_err(|e| {
            log_op_error!(
                "chore_get_by_id",
                &e,
                duration_ms = elapsed_ms(start),
                chore_id = id
            );
            e
        })?;

        log_op_end!(
            "chore_get_by_id",
            duration_ms = elapsed_ms(start),
            chore_id = id,
            found = chore.is_some()
        );

        Ok(chore)
    }

    fn get_by_id_impl(&self, id: i32) -> Result<Option<Chore>> {
        let conn = self.provider.new_connection()?;
        let mut stmt = conn.prepare(SELECT_CHORE_BY_ID).map_err(from_rusqlite)?;

        // Id is the primary key, so the first row is the only row
        let name: Option<String> = stmt
            .query_row(named_params! { "@id": id }, |row| row.get("Name"))
            .optional()
            .map_err(from_rusqlite)?;

        Ok(name.map(|name| Chore { id, name }))
    }

    /// Insert a chore and write the store-assigned id back onto it
    ///
    /// Any id already on `chore` is ignored. Returns the new id.
    ///
    /// # Errors
    ///
    /// - `Connection`: the database could not be opened
    /// - `ConstraintViolation`: the store rejected the row
    /// - `Persistence`: the insert failed or returned no id
    pub fn insert(&self, chore: &mut Chore) -> Result<i32> {
        log_op_start!("chore_insert");
        let start = Instant::now();

        let id = self.insert_impl(&chore.name).map_err(|e| {
            log_op_error!("chore_insert", &e, duration_ms = elapsed_ms(start));
            e
        })?;
        chore.id = id;

        log_op_end!(
            "chore_insert",
            duration_ms = elapsed_ms(start),
            chore_id = id
        );

        Ok(id)
    }

    fn insert_impl(&self, name: &str) -> Result<i32> {
        let conn = self.provider.new_connection()?;

        let id: Option<i32> = conn
            .query_row(INSERT_CHORE, named_params! { "@name": name }, |row| {
                row.get("Id")
            })
            .optional()
            .map_err(from_rusqlite)?;

        let id = id.ok_or_else(|| RoommatesError::IdentityNotReturned {
            table: "Chore".to_string(),
        })?;

        Ok(id)
    }
}

fn map_chore(row: &Row<'_>) -> rusqlite::Result<Chore> {
    Ok(Chore {
        id: row.get("Id")?,
        name: row.get("Name")?,
    })
}
