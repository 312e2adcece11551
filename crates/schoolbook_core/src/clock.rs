//! Wall-clock stamp helpers.
//!
//! All timestamps the core writes go through these two functions so entity
//! and rule-engine code stays clock-free and tests can assert on shape.

use chrono::Local;

/// Human-readable stamp format used by persisted timestamps.
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Compact stamp format used inside derived grade-record ids.
pub const COMPACT_FORMAT: &str = "%Y%m%d%H%M%S";

/// Current local time as `YYYY-MM-DD HH:MM:SS`.
pub fn now_stamp() -> String {
    Local::now().format(STAMP_FORMAT).to_string()
}

/// Current local time as `YYYYMMDDHHMMSS`.
pub fn now_compact() -> String {
    Local::now().format(COMPACT_FORMAT).to_string()
}
