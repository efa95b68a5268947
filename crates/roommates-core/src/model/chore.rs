use serde::{Deserialize, Serialize};

/// A household chore
///
/// The id is assigned by the store on insert. A chore built with
/// [`Chore::new`] carries id 0 until it has been inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    /// Store-assigned identifier
    pub id: i32,

    /// Human-readable name, e.g. "Dishes"
    pub name: String,
}

impl Chore {
    /// Create a chore that has not been persisted yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }

    /// Check whether the store has assigned an id to this chore
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
