//! Step-to-dismiss alarm
//!
//! The alarm pulses the vibration motor at a fixed interval and samples
//! the pedometer after every pulse. It stops once the wearer has walked
//! the configured number of steps, once the pulse budget is used up, or
//! when it is cancelled.
//!
//! [`AlarmSession`] holds the decision logic. [`run_alarm`] drives it with
//! a blocking delay; the firmware drives the same session from an async
//! task.

pub mod runner;
pub mod schedule;
pub mod session;
pub mod stop;

pub use runner::{pulse_and_sample, run_alarm, CANCEL_POLL_MS};
pub use schedule::AlarmSchedule;
pub use session::{AlarmOutcome, AlarmSession, Progress, StopReason};
pub use stop::StopFlag;
