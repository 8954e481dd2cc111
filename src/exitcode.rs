//! Exit codes (BSD sysexits.h compatible)

/// Generic failure
pub const FAILURE: i32 = 1;

/// Data format error (malformed CSV, short row)
pub const DATAERR: i32 = 65;

/// Cannot open input
pub const NOINPUT: i32 = 66;

/// Input/output error while writing the report
pub const IOERR: i32 = 74;
