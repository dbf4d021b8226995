//! Vibration motor task
//!
//! Plays patterns requested over `VIBE_CMD` with the non-blocking motor
//! driver.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

use stepwake_core::traits::{VibePattern, Vibrator};
use stepwake_drivers::vibe::VibeMotor;

use crate::channels::{VibeCommand, VIBE_CMD};

/// Motor update interval
const UPDATE_MS: u32 = 10;

/// Vibrator handle for tasks that do not own the motor
pub struct SignalVibrator;

impl Vibrator for SignalVibrator {
    fn pulse(&mut self, pattern: VibePattern) {
        VIBE_CMD.signal(VibeCommand::Pulse(pattern));
    }

    fn cancel(&mut self) {
        VIBE_CMD.signal(VibeCommand::Cancel);
    }
}

/// Vibe task - owns the motor pin
#[embassy_executor::task]
pub async fn vibe_task(mut motor: VibeMotor<Output<'static>>) {
    info!("Vibe task started");

    let mut ticker = Ticker::every(Duration::from_millis(UPDATE_MS as u64));

    loop {
        if let Some(cmd) = VIBE_CMD.try_take() {
            trace!("Vibe command: {:?}", cmd);
            match cmd {
                VibeCommand::Pulse(pattern) => motor.pulse(pattern),
                VibeCommand::Cancel => motor.cancel(),
            }
        }

        motor.update_with_delta(UPDATE_MS);
        ticker.next().await;
    }
}
