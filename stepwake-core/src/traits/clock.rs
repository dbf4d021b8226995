//! Wall clock trait

use crate::time::{fields_at, CalendarFields, Timestamp};

/// Source of the current absolute time and the user's clock settings
pub trait WallClock {
    /// Current time
    fn now(&self) -> Timestamp;

    /// Whether the user prefers a 24 hour clock
    fn is_24h_style(&self) -> bool;

    /// Offset of local time from UTC in seconds
    fn utc_offset_s(&self) -> i32 {
        0
    }

    /// Local calendar fields for `ts`
    fn local_fields(&self, ts: Timestamp) -> CalendarFields {
        fields_at(ts, self.utc_offset_s())
    }
}

impl<T: WallClock + ?Sized> WallClock for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }

    fn is_24h_style(&self) -> bool {
        (**self).is_24h_style()
    }

    fn utc_offset_s(&self) -> i32 {
        (**self).utc_offset_s()
    }
}
