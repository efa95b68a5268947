//! Canonical schema constants for structured logging
//!
//! `tracing` field names have to be written as identifiers at the call
//! site, so the macros and repositories spell them out literally. These
//! constants are the matching names for code that reads events back, such
//! as the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_CHORE_ID: &str = "chore_id";
pub const FIELD_ROOMMATE_ID: &str = "roommate_id";

// Result shape
pub const FIELD_ROW_COUNT: &str = "row_count";
pub const FIELD_FOUND: &str = "found";
pub const FIELD_HAS_ROOM: &str = "has_room";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
