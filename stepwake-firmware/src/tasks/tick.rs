//! Minute tick task
//!
//! Sleeps until the next wall-clock minute boundary and signals the face.

use defmt::*;
use embassy_time::Timer;

use stepwake_core::traits::WallClock;

use crate::channels::MINUTE_TICK;
use crate::clock::RtcClock;

/// Tick task - signals once per minute, aligned to the RTC
#[embassy_executor::task]
pub async fn tick_task(clock: &'static RtcClock) {
    info!("Tick task started");

    loop {
        let wait_s = clock.now().secs_to_next_minute();
        Timer::after_secs(wait_s as u64).await;

        let now = clock.now();
        trace!("Minute tick at {}", now.as_secs());
        MINUTE_TICK.signal(now);
    }
}
