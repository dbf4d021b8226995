//! Step sensing

pub mod pedometer;

pub use pedometer::{StepLog, DEFAULT_STEP_LOG_LEN};
