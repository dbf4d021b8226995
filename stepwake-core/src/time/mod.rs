//! Time keeping utilities
//!
//! Timestamps, broken-down calendar fields, wake-time construction and
//! the `HH:MM` text shown on the watch face.

pub mod calendar;
pub mod format;
pub mod timestamp;

pub use calendar::{compute_wake_time, fields_at, timestamp_from_fields, wake_time_on, CalendarFields};
pub use format::{format_time, ClockStyle, TimeText, TIME_TEXT_LEN};
pub use timestamp::{Timestamp, SECONDS_PER_DAY};
