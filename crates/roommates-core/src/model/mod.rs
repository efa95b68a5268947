pub mod chore;
pub mod room;
pub mod roommate;

pub use chore::Chore;
pub use room::Room;
pub use roommate::Roommate;
