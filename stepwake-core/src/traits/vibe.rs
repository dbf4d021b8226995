//! Vibration motor trait and pulse patterns

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One step of a vibration pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VibeSegment {
    /// Motor on
    pub on: bool,
    /// Segment length in milliseconds
    pub duration_ms: u16,
}

impl VibeSegment {
    const fn on(duration_ms: u16) -> Self {
        Self { on: true, duration_ms }
    }

    const fn off(duration_ms: u16) -> Self {
        Self { on: false, duration_ms }
    }
}

const SHORT: &[VibeSegment] = &[VibeSegment::on(250)];
const LONG: &[VibeSegment] = &[VibeSegment::on(500)];
const DOUBLE: &[VibeSegment] = &[
    VibeSegment::on(100),
    VibeSegment::off(100),
    VibeSegment::on(100),
];

/// Built-in vibration patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VibePattern {
    Short,
    #[default]
    Long,
    Double,
}

impl VibePattern {
    /// Segments making up this pattern
    pub fn segments(&self) -> &'static [VibeSegment] {
        match self {
            VibePattern::Short => SHORT,
            VibePattern::Long => LONG,
            VibePattern::Double => DOUBLE,
        }
    }

    /// Total pattern length in milliseconds
    pub fn duration_ms(&self) -> u32 {
        self.segments().iter().map(|s| s.duration_ms as u32).sum()
    }
}

/// Vibration motor
///
/// `pulse` starts the pattern and returns immediately; the implementation
/// times the segments itself. Starting a new pattern replaces any pattern
/// still playing.
pub trait Vibrator {
    /// Start playing `pattern`
    fn pulse(&mut self, pattern: VibePattern);

    /// Stop the motor and drop any pattern in progress
    fn cancel(&mut self);
}

impl<T: Vibrator + ?Sized> Vibrator for &mut T {
    fn pulse(&mut self, pattern: VibePattern) {
        (**self).pulse(pattern)
    }

    fn cancel(&mut self) {
        (**self).cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_durations() {
        assert_eq!(VibePattern::Short.duration_ms(), 250);
        assert_eq!(VibePattern::Long.duration_ms(), 500);
        assert_eq!(VibePattern::Double.duration_ms(), 300);
    }

    #[test]
    fn test_patterns_start_on() {
        for pattern in [VibePattern::Short, VibePattern::Long, VibePattern::Double] {
            assert!(pattern.segments()[0].on);
        }
    }
}
