//! Calendar fields and wake-time construction
//!
//! Conversions run on the proleptic Gregorian calendar with no leap
//! seconds. A UTC offset is applied only where a caller passes one in;
//! wake-time construction does not.

use chrono::{DateTime, Datelike, NaiveDate, Timelike};

use super::timestamp::{Timestamp, SECONDS_PER_DAY};
use crate::traits::WallClock;

/// Broken-down calendar view of a timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalendarFields {
    pub year: i32,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
    /// Days since Monday (0-6)
    pub weekday: u8,
}

/// Break `ts` down into calendar fields, shifted by `utc_offset_s`
///
/// Timestamps outside the representable calendar range collapse to the
/// epoch.
pub fn fields_at(ts: Timestamp, utc_offset_s: i32) -> CalendarFields {
    let shifted = ts.as_secs().saturating_add(utc_offset_s as i64);
    let dt = DateTime::from_timestamp(shifted, 0).unwrap_or_default();

    CalendarFields {
        year: dt.year(),
        month: dt.month() as u8,
        day: dt.day() as u8,
        hour: dt.hour() as u8,
        minute: dt.minute() as u8,
        second: dt.second() as u8,
        weekday: dt.weekday().num_days_from_monday() as u8,
    }
}

/// Convert calendar fields back to a timestamp (fields read as UTC)
///
/// Returns `None` for dates or times that do not exist. The weekday is
/// ignored.
pub fn timestamp_from_fields(fields: &CalendarFields) -> Option<Timestamp> {
    let secs = NaiveDate::from_ymd_opt(fields.year, fields.month as u32, fields.day as u32)?
        .and_hms_opt(fields.hour as u32, fields.minute as u32, fields.second as u32)?
        .and_utc()
        .timestamp();
    Some(Timestamp(secs))
}

/// Wake time on the UTC calendar day containing `today`
///
/// Hour, minute and second are not validated: out-of-range values carry
/// into the next unit and negative values borrow, so `(7, 90, 0)` is
/// 08:30 and `(0, -1, 0)` is 23:59 on the previous day.
pub fn wake_time_on(today: Timestamp, hour: i32, minute: i32, second: i32) -> Timestamp {
    let date = fields_at(today, 0);
    let midnight = CalendarFields {
        hour: 0,
        minute: 0,
        second: 0,
        ..date
    };
    let midnight = timestamp_from_fields(&midnight)
        .unwrap_or(Timestamp(today.as_secs().div_euclid(SECONDS_PER_DAY) * SECONDS_PER_DAY));

    midnight + (hour as i64 * 3600 + minute as i64 * 60 + second as i64)
}

/// Absolute timestamp for `hour:minute:second` today, according to `clock`
///
/// The date is read on the UTC calendar and converted back on the UTC
/// calendar; the clock's UTC offset is not consulted.
pub fn compute_wake_time<C: WallClock + ?Sized>(
    clock: &C,
    hour: i32,
    minute: i32,
    second: i32,
) -> Timestamp {
    wake_time_on(clock.now(), hour, minute, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2024-01-01T00:00:00Z
    const NEW_YEAR_2024: i64 = 1_704_067_200;

    struct FixedClock(Timestamp);

    impl WallClock for FixedClock {
        fn now(&self) -> Timestamp {
            self.0
        }

        fn is_24h_style(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_fields_at_epoch() {
        let f = fields_at(Timestamp::EPOCH, 0);
        assert_eq!((f.year, f.month, f.day), (1970, 1, 1));
        assert_eq!((f.hour, f.minute, f.second), (0, 0, 0));
        // 1970-01-01 was a Thursday
        assert_eq!(f.weekday, 3);
    }

    #[test]
    fn test_fields_at_with_offset() {
        // 2024-01-01T14:05:30Z shown at UTC-02:00
        let ts = Timestamp(NEW_YEAR_2024 + 14 * 3600 + 5 * 60 + 30);
        let f = fields_at(ts, -2 * 3600);
        assert_eq!((f.hour, f.minute, f.second), (12, 5, 30));

        // Offset crossing midnight backwards
        let f = fields_at(Timestamp(NEW_YEAR_2024), -60);
        assert_eq!((f.year, f.month, f.day), (2023, 12, 31));
        assert_eq!((f.hour, f.minute), (23, 59));
    }

    #[test]
    fn test_timestamp_from_fields() {
        let f = fields_at(Timestamp(NEW_YEAR_2024 + 3_723), 0);
        assert_eq!(timestamp_from_fields(&f), Some(Timestamp(NEW_YEAR_2024 + 3_723)));

        let bogus = CalendarFields {
            year: 2023,
            month: 2,
            day: 30,
            ..Default::default()
        };
        assert_eq!(timestamp_from_fields(&bogus), None);
    }

    #[test]
    fn test_compute_wake_time_new_year() {
        // "Today" is mid-afternoon on 2024-01-01
        let clock = FixedClock(Timestamp(NEW_YEAR_2024 + 15 * 3600));
        let wake = compute_wake_time(&clock, 7, 30, 0);
        assert_eq!(wake, Timestamp(1_704_094_200));

        let f = fields_at(wake, 0);
        assert_eq!((f.year, f.month, f.day), (2024, 1, 1));
        assert_eq!((f.hour, f.minute, f.second), (7, 30, 0));
    }

    #[test]
    fn test_wake_time_ignores_time_of_day() {
        let early = wake_time_on(Timestamp(NEW_YEAR_2024), 7, 30, 0);
        let late = wake_time_on(Timestamp(NEW_YEAR_2024 + SECONDS_PER_DAY - 1), 7, 30, 0);
        assert_eq!(early, late);
    }

    #[test]
    fn test_wake_time_carries_out_of_range() {
        let today = Timestamp(NEW_YEAR_2024);
        assert_eq!(wake_time_on(today, 7, 90, 0), wake_time_on(today, 8, 30, 0));
        assert_eq!(wake_time_on(today, 24, 0, 0), Timestamp(NEW_YEAR_2024 + SECONDS_PER_DAY));
        assert_eq!(wake_time_on(today, 0, -1, 0), Timestamp(NEW_YEAR_2024 - 60));
        assert_eq!(wake_time_on(today, 0, 0, 75), Timestamp(NEW_YEAR_2024 + 75));
    }
}
