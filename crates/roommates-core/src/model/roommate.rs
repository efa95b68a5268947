use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::room::Room;

/// A roommate, with the room they occupy embedded
///
/// The room comes from an outer join, so a roommate without an assigned
/// room is represented by `room: None` rather than a placeholder record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roommate {
    /// Store-assigned identifier
    pub id: i32,

    pub first_name: String,

    pub last_name: String,

    /// Share of the rent, in whole percent
    pub rent_portion: i32,

    /// When the roommate moved in (no timezone)
    ///
    /// Stored as `YYYY-MM-DD HH:MM:SS` text; the schema rejects other forms.
    pub moved_in_date: NaiveDateTime,

    /// Assigned room, if any
    pub room: Option<Room>,
}

impl Roommate {
    /// Full display name, "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check if this roommate has a room assigned
    pub fn has_room(&self) -> bool {
        self.room.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(room: Option<Room>) -> Roommate {
        Roommate {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            rent_portion: 40,
            moved_in_date: NaiveDate::from_ymd_opt(2021, 3, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            room,
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample(None).full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_has_room() {
        assert!(!sample(None).has_room());

        let room = Room {
            id: 2,
            name: "Attic".to_string(),
            max_occupancy: 1,
        };
        assert!(sample(Some(room)).has_room());
    }

    #[test]
    fn test_absent_room_serializes_as_null() {
        let json = serde_json::to_value(sample(None)).unwrap();
        assert!(json["room"].is_null());
    }
}
