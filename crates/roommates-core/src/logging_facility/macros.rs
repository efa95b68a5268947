//! Canonical logging macros
//!
//! Every macro stamps `component` with the calling module path and `op`
//! with the operation name, so start/end pairs can be joined downstream.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use roommates_core::log_op_start;
/// log_op_start!("chore_get_all");
/// log_op_start!("chore_get_by_id", chore_id = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use roommates_core::log_op_end;
/// log_op_end!("chore_get_all", duration_ms = 3);
/// log_op_end!("chore_get_all", duration_ms = 3, row_count = 12);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Takes a reference to an `RmError` so the caller can still return it.
///
/// # Example
///
/// ```
/// # use roommates_core::log_op_error;
/// # use roommates_core::errors::{ErrorKind, RmError};
/// let err = RmError::new(ErrorKind::Connection);
/// log_op_error!("chore_insert", &err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let rm_err: &$crate::errors::RmError = $err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?rm_err.kind(),
            err_code = rm_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let rm_err: &$crate::errors::RmError = $err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?rm_err.kind(),
            err_code = rm_err.code(),
            $($field)*
        );
    }};
}
