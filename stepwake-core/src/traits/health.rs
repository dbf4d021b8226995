//! Step counter trait

use crate::time::Timestamp;

/// Errors from the step sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// No step data for the requested interval (sensor missing, off or
    /// not yet warmed up)
    Unavailable,
}

/// Pedometer query
pub trait StepCounter {
    /// Cumulative steps taken between `start` and `end`, inclusive
    fn step_count_since(&mut self, start: Timestamp, end: Timestamp) -> Result<u32, SensorError>;
}
