//! Board-agnostic core logic for the Stepwake watch face
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (clock, step counter, vibrator, display)
//! - Timestamp and calendar utilities, clock text formatting
//! - The step-to-dismiss alarm session and its blocking runner
//! - Alarm scheduling and watch face state
//! - Configuration types and the embedded config parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod fmt;

pub mod alarm;
pub mod config;
pub mod face;
pub mod time;
pub mod traits;
