//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in stepwake-core for the watch hardware:
//!
//! - Vibration motor (GPIO, pattern playback)
//! - Pedometer step log (timestamped step events)
//! - SH1106 OLED text display (I2C)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod health;
pub mod vibe;
