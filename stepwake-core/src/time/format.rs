//! Watch face time text

use core::fmt::Write;

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::calendar::CalendarFields;

/// Capacity of the time text buffer
pub const TIME_TEXT_LEN: usize = 8;

/// Text shown on the watch face, e.g. `"14:05"`
pub type TimeText = String<TIME_TEXT_LEN>;

/// Hour display style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockStyle {
    /// `00`-`23`
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "24h"))]
    TwentyFourHour,
    /// `01`-`12`, zero padded, no AM/PM marker
    #[cfg_attr(feature = "serde", serde(rename = "12h"))]
    TwelveHour,
}

impl ClockStyle {
    /// Style from the platform's "24 hour" flag
    pub fn from_24h_flag(is_24h: bool) -> Self {
        if is_24h {
            ClockStyle::TwentyFourHour
        } else {
            ClockStyle::TwelveHour
        }
    }

    /// Hour as displayed in this style
    pub fn display_hour(&self, hour: u8) -> u8 {
        match self {
            ClockStyle::TwentyFourHour => hour,
            ClockStyle::TwelveHour => match hour % 12 {
                0 => 12,
                h => h,
            },
        }
    }
}

/// Format the hour and minute of `fields` as `HH:MM`
pub fn format_time(fields: &CalendarFields, style: ClockStyle) -> TimeText {
    let mut text = TimeText::new();
    // "HH:MM" always fits in the buffer
    let _ = write!(text, "{:02}:{:02}", style.display_hour(fields.hour), fields.minute);
    text
}
