//! Date-window rules for selection processes.

use chrono::Months;

use crate::types::Timestamp;

/// Length of a selection process window when no end date is supplied.
pub const DEFAULT_WINDOW_MONTHS: u32 = 12;

/// The window a new selection process gets when created at `now`:
/// it opens immediately and closes one calendar year later.
///
/// A start on February 29th closes on February 28th of the following year.
pub fn default_window(now: Timestamp) -> (Timestamp, Timestamp) {
    (now, default_end(now))
}

/// The default closing date for a window opening at `start`.
pub fn default_end(start: Timestamp) -> Timestamp {
    start
        .checked_add_months(Months::new(DEFAULT_WINDOW_MONTHS))
        .unwrap_or(start)
}
