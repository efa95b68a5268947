//! Roommates Core - domain records, error facility and logging facility
//!
//! This crate provides the pieces every data-access crate builds on:
//! - Plain domain records (`Chore`, `Room`, `Roommate`)
//! - The structured error facility (`ErrorKind`, `RmError`, `RoommatesError`)
//! - The structured logging facility (`init`, `log_op_*` macros, test capture)

pub mod errors;
pub mod logging_facility;
pub mod model;

pub use roommates_core_types::schema;

// Re-export commonly used types
pub use errors::{ErrorKind, Result, RmError, RoommatesError};
pub use model::{Chore, Room, Roommate};
