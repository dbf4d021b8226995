//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod alarm;
pub mod button;
pub mod face;
pub mod pedometer;
pub mod tick;
pub mod vibe;

pub use alarm::alarm_task;
pub use button::button_task;
pub use face::{face_task, FaceDisplay};
pub use pedometer::pedometer_task;
pub use tick::tick_task;
pub use vibe::vibe_task;
