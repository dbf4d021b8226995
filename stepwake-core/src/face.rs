//! Watch face state
//!
//! Everything the face needs between ticks lives here instead of in
//! globals: the last rendered text and the alarm schedule.

use crate::alarm::AlarmSchedule;
use crate::time::{format_time, ClockStyle, TimeText};
use crate::traits::{DisplayError, TextDisplay, WallClock};

/// What happened on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    /// Result of pushing the new text to the display
    pub display: Result<(), DisplayError>,
    /// The armed wake time has been reached
    pub alarm_due: bool,
}

/// Watch face application state
#[derive(Debug, Clone, Default)]
pub struct WatchFace {
    text: TimeText,
    schedule: AlarmSchedule,
}

impl WatchFace {
    pub fn new(schedule: AlarmSchedule) -> Self {
        Self {
            text: TimeText::new(),
            schedule,
        }
    }

    /// Text currently shown
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn schedule(&self) -> &AlarmSchedule {
        &self.schedule
    }

    pub fn schedule_mut(&mut self) -> &mut AlarmSchedule {
        &mut self.schedule
    }

    /// First render after boot
    pub fn init<C, D>(&mut self, clock: &C, display: &mut D) -> Result<(), DisplayError>
    where
        C: WallClock + ?Sized,
        D: TextDisplay + ?Sized,
    {
        self.text.clear();
        self.update_time(clock, display)
    }

    /// Render the current local time and push it to the display
    pub fn update_time<C, D>(&mut self, clock: &C, display: &mut D) -> Result<(), DisplayError>
    where
        C: WallClock + ?Sized,
        D: TextDisplay + ?Sized,
    {
        let fields = clock.local_fields(clock.now());
        let style = ClockStyle::from_24h_flag(clock.is_24h_style());
        self.text = format_time(&fields, style);
        display.set_text(&self.text)
    }

    /// Minute tick: refresh the display and check the alarm
    ///
    /// A display failure does not stop the alarm check.
    pub fn on_tick<C, D>(&mut self, clock: &C, display: &mut D) -> TickOutcome
    where
        C: WallClock + ?Sized,
        D: TextDisplay + ?Sized,
    {
        let display = self.update_time(clock, display);
        let alarm_due = self.schedule.take_due(clock.now());
        TickOutcome { display, alarm_due }
    }
}
