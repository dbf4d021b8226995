//! Pedometer task
//!
//! Every rising edge on the step-detect line is one step.

use defmt::*;
use embassy_rp::gpio::Input;

use stepwake_core::traits::WallClock;

use crate::channels::STEP_LOG;
use crate::clock::RtcClock;

/// Pedometer task - timestamps step interrupts into the shared log
#[embassy_executor::task]
pub async fn pedometer_task(mut step_pin: Input<'static>, clock: &'static RtcClock) {
    info!("Pedometer task started");

    STEP_LOG.lock(|log| log.borrow_mut().set_available(true));

    loop {
        step_pin.wait_for_rising_edge().await;

        let now = clock.now();
        STEP_LOG.lock(|log| log.borrow_mut().record_step(now));
        trace!("Step at {}", now.as_secs());
    }
}
