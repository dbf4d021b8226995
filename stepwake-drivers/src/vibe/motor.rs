//! GPIO vibration motor
//!
//! Drives an eccentric-mass motor through a MOSFET on a single GPIO pin
//! and plays [`VibePattern`]s without blocking.
//!
//! # Usage
//!
//! `pulse()` starts a pattern and returns. Call `update_with_delta()`
//! periodically (every 10 ms is plenty) to advance through the pattern's
//! on/off segments; the motor switches off when the pattern ends.
//!
//! ```ignore
//! let mut motor = VibeMotor::new_active_high(pin);
//! motor.pulse(VibePattern::Long);
//!
//! // In a periodic task:
//! motor.update_with_delta(10);
//! ```

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};
use stepwake_core::traits::{VibePattern, VibeSegment, Vibrator};

/// GPIO vibration motor with pattern playback
pub struct VibeMotor<P> {
    pin: P,
    /// If true, motor ON = pin LOW
    inverted: bool,
    /// Pattern being played (empty when idle)
    segments: &'static [VibeSegment],
    /// Index of the current segment
    index: usize,
    /// Time spent in the current segment (ms)
    elapsed_ms: u32,
    /// Current logical state (true = motor running)
    on: bool,
}

impl<P: OutputPin<Error = Infallible>> VibeMotor<P> {
    /// Create a new motor driver; the motor starts off
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut motor = Self {
            pin,
            inverted,
            segments: &[],
            index: 0,
            elapsed_ms: 0,
            on: false,
        };
        motor.apply();
        motor
    }

    /// Motor switched on by driving the pin high
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Motor switched on by driving the pin low
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Check if the motor is running right now
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Check if a pattern is still playing (including its off segments)
    pub fn is_playing(&self) -> bool {
        self.index < self.segments.len()
    }

    /// Advance playback by `delta_ms`
    ///
    /// Returns whether the motor is on afterwards.
    pub fn update_with_delta(&mut self, delta_ms: u32) -> bool {
        let mut remaining = delta_ms;

        while let Some(segment) = self.segments.get(self.index) {
            let left = (segment.duration_ms as u32).saturating_sub(self.elapsed_ms);
            if remaining < left {
                self.elapsed_ms += remaining;
                break;
            }
            remaining -= left;
            self.index += 1;
            self.elapsed_ms = 0;
        }

        self.apply();
        self.on
    }

    /// Drive the pin for the current segment
    fn apply(&mut self) {
        let on = self
            .segments
            .get(self.index)
            .map(|segment| segment.on)
            .unwrap_or(false);
        self.on = on;

        // Normal: on=true, inverted=false → high
        // Inverted: on=true, inverted=true → low
        let state = PinState::from(on != self.inverted);
        if let Err(e) = self.pin.set_state(state) {
            match e {}
        }
    }
}

impl<P: OutputPin<Error = Infallible>> Vibrator for VibeMotor<P> {
    fn pulse(&mut self, pattern: VibePattern) {
        self.segments = pattern.segments();
        self.index = 0;
        self.elapsed_ms = 0;
        self.apply();
    }

    fn cancel(&mut self) {
        self.segments = &[];
        self.index = 0;
        self.elapsed_ms = 0;
        self.apply();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }
    }

    #[test]
    fn test_starts_off() {
        let motor = VibeMotor::new_active_high(MockPin::new());
        assert!(!motor.is_on());
        assert!(!motor.is_playing());
        assert!(!motor.pin.high);

        // Active-low idles with the pin high
        let motor = VibeMotor::new_active_low(MockPin::new());
        assert!(!motor.is_on());
        assert!(motor.pin.high);
    }

    #[test]
    fn test_long_pulse() {
        let mut motor = VibeMotor::new_active_high(MockPin::new());
        motor.pulse(VibePattern::Long);
        assert!(motor.is_on());
        assert!(motor.pin.high);

        assert!(motor.update_with_delta(490));
        assert!(!motor.update_with_delta(10));
        assert!(!motor.is_playing());
        assert!(!motor.pin.high);
    }

    #[test]
    fn test_double_pulse_segments() {
        let mut motor = VibeMotor::new_active_high(MockPin::new());
        motor.pulse(VibePattern::Double);

        assert!(motor.update_with_delta(50));
        // Gap between the two buzzes
        assert!(!motor.update_with_delta(60));
        assert!(motor.is_playing());
        // Second buzz
        assert!(motor.update_with_delta(100));
        // Large delta runs straight past the end
        assert!(!motor.update_with_delta(1_000));
        assert!(!motor.is_playing());
    }

    #[test]
    fn test_active_low_pulse() {
        let mut motor = VibeMotor::new_active_low(MockPin::new());
        motor.pulse(VibePattern::Short);
        assert!(motor.is_on());
        assert!(!motor.pin.high);

        motor.update_with_delta(250);
        assert!(!motor.is_on());
        assert!(motor.pin.high);
    }

    #[test]
    fn test_new_pulse_restarts_pattern() {
        let mut motor = VibeMotor::new_active_high(MockPin::new());
        motor.pulse(VibePattern::Short);
        motor.update_with_delta(200);
        motor.pulse(VibePattern::Short);
        assert!(motor.update_with_delta(200));
    }

    #[test]
    fn test_cancel() {
        let mut motor = VibeMotor::new_active_high(MockPin::new());
        motor.pulse(VibePattern::Long);
        motor.cancel();
        assert!(!motor.is_on());
        assert!(!motor.is_playing());
        assert!(!motor.pin.high);
    }
}
