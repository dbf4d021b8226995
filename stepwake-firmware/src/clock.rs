//! RTC-backed wall clock
//!
//! The RP2040 RTC keeps UTC calendar time. Local time is derived from the
//! configured UTC offset; the 12/24 hour preference comes from config.

use core::cell::RefCell;

use defmt::*;
use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use stepwake_core::config::ClockConfig;
use stepwake_core::time::{fields_at, timestamp_from_fields, CalendarFields, ClockStyle, Timestamp};
use stepwake_core::traits::WallClock;

/// Time the RTC starts from when it was not running (2024-01-01T00:00:00Z)
const DEFAULT_BOOT_TIME: Timestamp = Timestamp(1_704_067_200);

/// Wall clock over the on-chip RTC
pub struct RtcClock {
    rtc: Mutex<CriticalSectionRawMutex, RefCell<Rtc<'static, RTC>>>,
    settings: ClockConfig,
}

impl RtcClock {
    /// Wrap the RTC, starting it at a default date if it is not running
    pub fn new(mut rtc: Rtc<'static, RTC>, settings: ClockConfig) -> Self {
        if !rtc.is_running() {
            warn!("RTC not running, starting at default date");
            if rtc.set_datetime(to_rtc(&fields_at(DEFAULT_BOOT_TIME, 0))).is_err() {
                error!("Failed to set RTC");
            }
        }

        Self {
            rtc: Mutex::new(RefCell::new(rtc)),
            settings,
        }
    }
}

impl WallClock for RtcClock {
    fn now(&self) -> Timestamp {
        let reading = self.rtc.lock(|rtc| rtc.borrow().now());
        match reading.ok().and_then(|dt| timestamp_from_fields(&from_rtc(&dt))) {
            Some(ts) => ts,
            None => {
                warn!("RTC read failed");
                DEFAULT_BOOT_TIME
            }
        }
    }

    fn is_24h_style(&self) -> bool {
        self.settings.style == ClockStyle::TwentyFourHour
    }

    fn utc_offset_s(&self) -> i32 {
        self.settings.utc_offset_s()
    }
}

fn to_rtc(fields: &CalendarFields) -> DateTime {
    let day_of_week = match fields.weekday {
        0 => DayOfWeek::Monday,
        1 => DayOfWeek::Tuesday,
        2 => DayOfWeek::Wednesday,
        3 => DayOfWeek::Thursday,
        4 => DayOfWeek::Friday,
        5 => DayOfWeek::Saturday,
        _ => DayOfWeek::Sunday,
    };

    DateTime {
        year: fields.year.clamp(0, 4095) as u16,
        month: fields.month,
        day: fields.day,
        day_of_week,
        hour: fields.hour,
        minute: fields.minute,
        second: fields.second,
    }
}

fn from_rtc(dt: &DateTime) -> CalendarFields {
    let weekday = match dt.day_of_week {
        DayOfWeek::Monday => 0,
        DayOfWeek::Tuesday => 1,
        DayOfWeek::Wednesday => 2,
        DayOfWeek::Thursday => 3,
        DayOfWeek::Friday => 4,
        DayOfWeek::Saturday => 5,
        DayOfWeek::Sunday => 6,
    };

    CalendarFields {
        year: dt.year as i32,
        month: dt.month,
        day: dt.day,
        hour: dt.hour,
        minute: dt.minute,
        second: dt.second,
        weekday,
    }
}
