//! Alarm session state

use crate::config::AlarmConfig;
use crate::time::Timestamp;
use crate::traits::SensorError;

/// Why an alarm run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopReason {
    /// The wearer walked the step goal
    GoalReached,
    /// All pulses were spent
    TimedOut,
    /// Stopped from outside (button, host)
    Cancelled,
}

/// Summary of a finished alarm run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmOutcome {
    pub reason: StopReason,
    /// Pulses emitted
    pub tries: u16,
    /// Steps counted since the alarm started
    pub steps_walked: u32,
    /// Samples where the step sensor had no data
    pub sensor_misses: u16,
}

/// Result of recording one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Progress {
    /// Sleep and pulse again
    Continue,
    /// Stop now
    Finished(StopReason),
}

/// State of one alarm run
///
/// Created when the alarm triggers and dropped when it ends. A missing
/// sample keeps the previous step count, so an unavailable sensor never
/// advances toward the goal and the run falls back to its pulse budget.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmSession {
    start_time: Timestamp,
    starting_steps: u32,
    current_steps: u32,
    try_count: u16,
    sensor_misses: u16,
}

impl AlarmSession {
    /// Start a session from the first step reading (0 if unavailable)
    pub fn begin(start_time: Timestamp, initial: Result<u32, SensorError>) -> Self {
        let starting_steps = initial.unwrap_or(0);
        Self {
            start_time,
            starting_steps,
            current_steps: starting_steps,
            try_count: 0,
            sensor_misses: 0,
        }
    }

    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    pub fn starting_steps(&self) -> u32 {
        self.starting_steps
    }

    pub fn current_steps(&self) -> u32 {
        self.current_steps
    }

    pub fn try_count(&self) -> u16 {
        self.try_count
    }

    pub fn sensor_misses(&self) -> u16 {
        self.sensor_misses
    }

    /// Steps walked since the session began
    pub fn steps_walked(&self) -> u32 {
        self.current_steps.saturating_sub(self.starting_steps)
    }

    /// Check whether another pulse may be emitted
    ///
    /// Returns the stop reason if the pulse budget is already spent.
    pub fn before_pulse(&self, config: &AlarmConfig) -> Option<StopReason> {
        if self.try_count >= config.max_tries {
            Some(StopReason::TimedOut)
        } else {
            None
        }
    }

    /// Record the step reading taken after a pulse
    pub fn record_sample(
        &mut self,
        reading: Result<u32, SensorError>,
        config: &AlarmConfig,
    ) -> Progress {
        match reading {
            Ok(steps) => self.current_steps = steps,
            Err(SensorError::Unavailable) => {
                self.sensor_misses = self.sensor_misses.saturating_add(1);
            }
        }
        self.try_count = self.try_count.saturating_add(1);

        if self.steps_walked() >= config.step_goal {
            Progress::Finished(StopReason::GoalReached)
        } else if self.try_count >= config.max_tries {
            Progress::Finished(StopReason::TimedOut)
        } else {
            Progress::Continue
        }
    }

    /// Close the session
    pub fn finish(&self, reason: StopReason) -> AlarmOutcome {
        AlarmOutcome {
            reason,
            tries: self.try_count,
            steps_walked: self.steps_walked(),
            sensor_misses: self.sensor_misses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(step_goal: u32, max_tries: u16) -> AlarmConfig {
        AlarmConfig {
            step_goal,
            max_tries,
            ..Default::default()
        }
    }

    #[test]
    fn test_begin_with_reading() {
        let session = AlarmSession::begin(Timestamp(100), Ok(7));
        assert_eq!(session.start_time(), Timestamp(100));
        assert_eq!(session.starting_steps(), 7);
        assert_eq!(session.current_steps(), 7);
        assert_eq!(session.steps_walked(), 0);
    }

    #[test]
    fn test_begin_without_sensor() {
        let session = AlarmSession::begin(Timestamp(100), Err(SensorError::Unavailable));
        assert_eq!(session.starting_steps(), 0);
        assert_eq!(session.try_count(), 0);
    }

    #[test]
    fn test_goal_reached() {
        let cfg = config(10, 45);
        let mut session = AlarmSession::begin(Timestamp(0), Ok(2));

        assert_eq!(session.record_sample(Ok(5), &cfg), Progress::Continue);
        assert_eq!(session.record_sample(Ok(11), &cfg), Progress::Continue);
        assert_eq!(
            session.record_sample(Ok(12), &cfg),
            Progress::Finished(StopReason::GoalReached)
        );

        let outcome = session.finish(StopReason::GoalReached);
        assert_eq!(outcome.tries, 3);
        assert_eq!(outcome.steps_walked, 10);
        assert_eq!(outcome.sensor_misses, 0);
    }

    #[test]
    fn test_miss_keeps_previous_count() {
        let cfg = config(10, 45);
        let mut session = AlarmSession::begin(Timestamp(0), Ok(0));

        session.record_sample(Ok(6), &cfg);
        assert_eq!(
            session.record_sample(Err(SensorError::Unavailable), &cfg),
            Progress::Continue
        );
        assert_eq!(session.current_steps(), 6);
        assert_eq!(session.sensor_misses(), 1);
    }

    #[test]
    fn test_budget_exhausted() {
        let cfg = config(10, 2);
        let mut session = AlarmSession::begin(Timestamp(0), Ok(0));

        assert_eq!(session.before_pulse(&cfg), None);
        assert_eq!(session.record_sample(Ok(1), &cfg), Progress::Continue);
        assert_eq!(
            session.record_sample(Ok(2), &cfg),
            Progress::Finished(StopReason::TimedOut)
        );
        assert_eq!(session.before_pulse(&cfg), Some(StopReason::TimedOut));
    }

    #[test]
    fn test_zero_budget_never_pulses() {
        let session = AlarmSession::begin(Timestamp(0), Ok(0));
        assert_eq!(session.before_pulse(&config(10, 0)), Some(StopReason::TimedOut));
    }

    #[test]
    fn test_counter_going_backwards_does_not_underflow() {
        let cfg = config(10, 45);
        let mut session = AlarmSession::begin(Timestamp(0), Ok(50));
        assert_eq!(session.record_sample(Ok(3), &cfg), Progress::Continue);
        assert_eq!(session.steps_walked(), 0);
    }
}
