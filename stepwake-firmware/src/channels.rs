//! Inter-task communication channels
//!
//! Defines the static signals and shared state used between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;

use stepwake_core::time::Timestamp;
use stepwake_core::traits::VibePattern;
use stepwake_drivers::health::StepLog;

/// Commands for the vibration motor task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VibeCommand {
    /// Start playing a pattern
    Pulse(VibePattern),
    /// Stop immediately
    Cancel,
}

/// Minute boundary reached (value is the RTC time at the tick)
pub static MINUTE_TICK: Signal<CriticalSectionRawMutex, Timestamp> = Signal::new();

/// Wake time reached, start the alarm
pub static ALARM_TRIGGER: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Dismiss button pressed, stop the alarm
pub static ALARM_CANCEL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Vibration motor command (updated by the alarm task)
pub static VIBE_CMD: Signal<CriticalSectionRawMutex, VibeCommand> = Signal::new();

/// Steps recorded by the pedometer task, queried by the alarm task
pub static STEP_LOG: Mutex<CriticalSectionRawMutex, RefCell<StepLog>> =
    Mutex::new(RefCell::new(StepLog::new()));
