//! Repository layer mapping SQLite rows to domain records
//!
//! ## Logging Ownership
//!
//! Each public repository method owns lifecycle logging for its operation:
//! `log_op_start!` at entry, then `log_op_end!` or `log_op_error!` with the
//! elapsed time. Connection setup below it logs only at debug level.

pub mod chore_repo;
pub mod roommate_repo;

pub use chore_repo::ChoreRepository;
pub use roommate_repo::RoommateRepository;

use std::time::Instant;

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
