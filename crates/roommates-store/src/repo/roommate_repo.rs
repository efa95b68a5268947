//! Roommate repository
//!
//! Reads a roommate joined with the room it occupies. The join is a LEFT
//! JOIN, so the room columns come back NULL for a roommate without a room.
//! That case maps to `room: None`. A non-NULL RoomId whose room columns are
//! NULL means the reference dangles, and is reported as `NullProjection`.

use super::elapsed_ms;
use crate::db::ConnectionProvider;
use crate::errors::{from_rusqlite, Result};
use chrono::NaiveDateTime;
use roommates_core::errors::RoommatesError;
use roommates_core::model::{Room, Roommate};
use roommates_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::{named_params, OptionalExtension, Row};
use std::time::Instant;

pub const SELECT_ROOMMATE_BY_ID: &str = "SELECT Roommate.Id, FirstName, LastName, RentPortion, MoveInDate, RoomId, Room.Name AS RoomName, Room.MaxOccupancy FROM Roommate LEFT JOIN Room ON Roommate.RoomId = Room.Id WHERE Roommate.Id = @id";

/// Read access to roommates and their rooms
#[derive(Debug, Clone)]
pub struct RoommateRepository {
    provider: ConnectionProvider,
}

impl RoommateRepository {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }

    /// Fetch a roommate with their room embedded
    ///
    /// Returns `Ok(None)` when no roommate has this id.
    ///
    /// # Errors
    ///
    /// - `Connection`: the database could not be opened
    /// - `NullProjection`: a required column was NULL, or RoomId points at a
    ///   room that does not exist
    /// - `Persistence`: the query failed
    pub fn get_by_id(&self, id: i32) -> Result<Option<Roommate>> {
        log_op_start!("roommate_get_by_id", roommate_id = id);
        let start = Instant::now();

        let roommate = self.get_by_id_impl(id).map_err(|e| {
            log_op_error!(
                "roommate_get_by_id",
                &e,
                duration_ms = elapsed_ms(start),
                roommate_id = id
            );
            e
        })?;

        log_op_end!(
            "roommate_get_by_id",
            duration_ms = elapsed_ms(start),
            roommate_id = id,
            found = roommate.is_some(),
            has_room = roommate.as_ref().is_some_and(Roommate::has_room)
        );

        Ok(roommate)
    }

    fn get_by_id_impl(&self, id: i32) -> Result<Option<Roommate>> {
        let conn = self.provider.new_connection()?;
        let mut stmt = conn
            .prepare(SELECT_ROOMMATE_BY_ID)
            .map_err(from_rusqlite)?;

        let row = stmt
            .query_row(named_params! { "@id": id }, RoommateRow::from_row)
            .optional()
            .map_err(from_rusqlite)?;

        match row {
            Some(row) => Ok(Some(Roommate::try_from(row)?)),
            None => Ok(None),
        }
    }
}

/// Raw projection of one joined row, before the room is resolved
struct RoommateRow {
    id: i32,
    first_name: String,
    last_name: String,
    rent_portion: i32,
    moved_in_date: NaiveDateTime,
    room_id: Option<i32>,
    room_name: Option<String>,
    max_occupancy: Option<i32>,
}

impl RoommateRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("Id")?,
            first_name: row.get("FirstName")?,
            last_name: row.get("LastName")?,
            rent_portion: row.get("RentPortion")?,
            moved_in_date: row.get("MoveInDate")?,
            room_id: row.get("RoomId")?,
            room_name: row.get("RoomName")?,
            max_occupancy: row.get("MaxOccupancy")?,
        })
    }
}

impl TryFrom<RoommateRow> for Roommate {
    type Error = RoommatesError;

    fn try_from(row: RoommateRow) -> std::result::Result<Self, Self::Error> {
        let room = match (row.room_id, row.room_name, row.max_occupancy) {
            (None, _, _) => None,
            (Some(room_id), Some(name), Some(max_occupancy)) => Some(Room {
                id: room_id,
                name,
                max_occupancy,
            }),
            (Some(room_id), _, _) => {
                return Err(RoommatesError::DanglingRoom {
                    roommate_id: row.id,
                    room_id,
                })
            }
        };

        Ok(Roommate {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            rent_portion: row.rent_portion,
            moved_in_date: row.moved_in_date,
            room,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(room_id: Option<i32>, room_name: Option<&str>, max: Option<i32>) -> RoommateRow {
        RoommateRow {
            id: 3,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            rent_portion: 25,
            moved_in_date: NaiveDate::from_ymd_opt(2022, 9, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            room_id,
            room_name: room_name.map(str::to_string),
            max_occupancy: max,
        }
    }

    #[test]
    fn test_null_room_id_maps_to_no_room() {
        let roommate = Roommate::try_from(row(None, None, None)).unwrap();
        assert_eq!(roommate.room, None);
        assert_eq!(roommate.full_name(), "Grace Hopper");
    }

    #[test]
    fn test_matched_join_maps_room() {
        let roommate = Roommate::try_from(row(Some(2), Some("Bedroom"), Some(2))).unwrap();
        assert_eq!(
            roommate.room,
            Some(Room {
                id: 2,
                name: "Bedroom".to_string(),
                max_occupancy: 2,
            })
        );
    }

    #[test]
    fn test_dangling_room_is_rejected() {
        let err = Roommate::try_from(row(Some(9), None, None)).unwrap_err();
        assert_eq!(
            err,
            RoommatesError::DanglingRoom {
                roommate_id: 3,
                room_id: 9,
            }
        );
    }
}
