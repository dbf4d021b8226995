//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::time::ClockStyle;
use crate::traits::VibePattern;

/// Default number of steps that dismiss the alarm
pub const DEFAULT_STEP_GOAL: u32 = 10;

/// Default pulse budget (45 pulses at 2 s is 90 s of alarm)
pub const DEFAULT_MAX_TRIES: u16 = 45;

/// Default pause between pulses
pub const DEFAULT_PULSE_INTERVAL_S: u16 = 2;

/// Alarm tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct AlarmConfig {
    /// Steps to walk before the alarm stops
    pub step_goal: u32,
    /// Maximum number of pulses
    pub max_tries: u16,
    /// Seconds between pulses
    pub pulse_interval_s: u16,
    /// Pattern played on every pulse
    pub pattern: VibePattern,
}

impl AlarmConfig {
    /// Pulse interval in milliseconds
    pub fn pulse_interval_ms(&self) -> u32 {
        self.pulse_interval_s as u32 * 1000
    }

    /// Upper bound on how long the alarm can run, in seconds
    pub fn max_duration_s(&self) -> u32 {
        self.max_tries as u32 * self.pulse_interval_s as u32
    }
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            step_goal: DEFAULT_STEP_GOAL,
            max_tries: DEFAULT_MAX_TRIES,
            pulse_interval_s: DEFAULT_PULSE_INTERVAL_S,
            pattern: VibePattern::Long,
        }
    }
}

/// Clock display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ClockConfig {
    /// 12 or 24 hour display
    pub style: ClockStyle,
    /// Local time offset from UTC in minutes
    pub utc_offset_minutes: i16,
}

impl ClockConfig {
    pub fn utc_offset_s(&self) -> i32 {
        self.utc_offset_minutes as i32 * 60
    }
}

/// Wake time
///
/// Values are not range checked; they carry like the calendar
/// conversion does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct WakeConfig {
    /// Arm the alarm at boot
    pub enabled: bool,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Fire every day instead of once
    pub repeat_daily: bool,
}

impl Default for WakeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            hour: 7,
            minute: 30,
            second: 0,
            repeat_daily: true,
        }
    }
}

/// Complete watch configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct WatchConfig {
    pub clock: ClockConfig,
    pub alarm: AlarmConfig,
    pub wake: WakeConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alarm_defaults() {
        let cfg = AlarmConfig::default();
        assert_eq!(cfg.step_goal, 10);
        assert_eq!(cfg.max_tries, 45);
        assert_eq!(cfg.pulse_interval_ms(), 2_000);
        assert_eq!(cfg.max_duration_s(), 90);
        assert_eq!(cfg.pattern, VibePattern::Long);
    }

    #[test]
    fn test_clock_offset() {
        let cfg = ClockConfig {
            style: ClockStyle::TwelveHour,
            utc_offset_minutes: -330,
        };
        assert_eq!(cfg.utc_offset_s(), -19_800);
    }
}
