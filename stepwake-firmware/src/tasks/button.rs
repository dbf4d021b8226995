//! Dismiss button task

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use crate::channels::ALARM_CANCEL;

/// Debounce delay before the level is re-checked
const DEBOUNCE_MS: u64 = 20;

/// Button task - active-low button cancels a running alarm
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>) {
    info!("Button task started");

    loop {
        button.wait_for_falling_edge().await;
        Timer::after_millis(DEBOUNCE_MS).await;

        if button.is_low() {
            debug!("Dismiss pressed");
            ALARM_CANCEL.signal(());
            button.wait_for_high().await;
        }
    }
}
