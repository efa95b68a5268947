#![allow(dead_code)]

use chrono::NaiveDateTime;
use roommates_store::schema::ensure_schema;
use roommates_store::ConnectionProvider;
use rusqlite::{params, Connection};
use tempfile::TempDir;

/// A throwaway on-disk database with the schema applied
///
/// Repositories open a new connection per call, so the database has to live
/// on disk; an in-memory database would be empty for every call.
pub struct TestDb {
    _dir: TempDir,
    pub provider: ConnectionProvider,
}

impl TestDb {
    pub fn new() -> Self {
        let db = Self::without_schema();
        let conn = db.connect();
        ensure_schema(&conn).unwrap();
        db
    }

    pub fn without_schema() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("roommates.db");
        let provider = ConnectionProvider::new(path.to_string_lossy());
        Self {
            _dir: dir,
            provider,
        }
    }

    pub fn connect(&self) -> Connection {
        self.provider.new_connection().unwrap()
    }

    pub fn insert_room(&self, name: &str, max_occupancy: i32) -> i32 {
        self.connect()
            .query_row(
                "INSERT INTO Room (Name, MaxOccupancy) VALUES (?1, ?2) RETURNING Id",
                params![name, max_occupancy],
                |row| row.get(0),
            )
            .unwrap()
    }

    pub fn insert_roommate(
        &self,
        first_name: &str,
        last_name: &str,
        rent_portion: i32,
        moved_in: NaiveDateTime,
        room_id: Option<i32>,
    ) -> i32 {
        self.connect()
            .query_row(
                "INSERT INTO Roommate (FirstName, LastName, RentPortion, MoveInDate, RoomId)
                 VALUES (?1, ?2, ?3, ?4, ?5) RETURNING Id",
                params![first_name, last_name, rent_portion, moved_in, room_id],
                |row| row.get(0),
            )
            .unwrap()
    }
}

pub fn datetime(y: i32, m: u32, d: u32) -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}
