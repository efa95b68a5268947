//! Error handling for roommates-store
//!
//! Maps SQLite failures onto the core `ErrorKind` taxonomy

use roommates_core::errors::{ErrorKind, RmError};
use rusqlite::types::Type;
use rusqlite::ErrorCode;

/// Result type alias using RmError
pub type Result<T> = std::result::Result<T, RmError>;

/// Create an invalid configuration error
pub fn invalid_config(reason: &str) -> RmError {
    RmError::new(ErrorKind::InvalidInput)
        .with_op("store_config")
        .with_message(reason.to_string())
}

/// Create a connection error from a failed open or connection setup
pub fn connection_error(err: rusqlite::Error) -> RmError {
    RmError::new(ErrorKind::Connection)
        .with_op("open_connection")
        .with_message(err.to_string())
}

/// Classify a rusqlite::Error into the core taxonomy
pub fn from_rusqlite(err: rusqlite::Error) -> RmError {
    let kind = classify(&err);
    RmError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

fn classify(err: &rusqlite::Error) -> ErrorKind {
    match err {
        rusqlite::Error::SqliteFailure(ffi_err, _) => match ffi_err.code {
            ErrorCode::ConstraintViolation => ErrorKind::ConstraintViolation,
            ErrorCode::CannotOpen
            | ErrorCode::NotADatabase
            | ErrorCode::PermissionDenied => ErrorKind::Connection,
            _ => ErrorKind::Persistence,
        },
        rusqlite::Error::InvalidColumnType(_, _, Type::Null) => ErrorKind::NullProjection,
        _ => ErrorKind::Persistence,
    }
}
