//! Hardware abstraction traits
//!
//! These traits define the interface between the watch logic and the
//! board-specific implementations (RTC, pedometer, vibration motor,
//! display).

pub mod clock;
pub mod display;
pub mod health;
pub mod vibe;

pub use clock::WallClock;
pub use display::{DisplayError, TextDisplay};
pub use health::{SensorError, StepCounter};
pub use vibe::{VibePattern, VibeSegment, Vibrator};
