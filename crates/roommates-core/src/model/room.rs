use serde::{Deserialize, Serialize};

/// A room in the house
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub max_occupancy: i32,
}
