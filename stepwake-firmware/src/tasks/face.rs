//! Watch face task
//!
//! Owns the display and the face state. Redraws on every minute tick and
//! hands off to the alarm task when the wake time comes round.

use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;

use stepwake_core::alarm::AlarmSchedule;
use stepwake_core::config::WakeConfig;
use stepwake_core::face::WatchFace;
use stepwake_drivers::display::Sh1106;

use crate::channels::{ALARM_TRIGGER, MINUTE_TICK};
use crate::clock::RtcClock;

/// SH1106 panel on the I2C0 bus
pub type FaceDisplay = Sh1106<I2c<'static, I2C0, Blocking>>;

/// Face task - renders the time and checks the wake schedule
#[embassy_executor::task]
pub async fn face_task(mut display: FaceDisplay, clock: &'static RtcClock, wake: WakeConfig) {
    info!("Face task started");

    let mut schedule = AlarmSchedule::disarmed();
    if wake.enabled {
        let at = schedule.arm(
            clock,
            wake.hour as i32,
            wake.minute as i32,
            wake.second as i32,
            wake.repeat_daily,
        );
        info!("Wake alarm armed for {} (daily: {})", at.as_secs(), wake.repeat_daily);
    } else {
        info!("Wake alarm disabled");
    }

    let mut face = WatchFace::new(schedule);
    if let Err(e) = face.init(clock, &mut display) {
        warn!("Initial render failed: {:?}", e);
    }

    loop {
        MINUTE_TICK.wait().await;

        let outcome = face.on_tick(clock, &mut display);
        if let Err(e) = outcome.display {
            warn!("Display update failed: {:?}", e);
        }
        if outcome.alarm_due {
            info!("Wake time reached");
            ALARM_TRIGGER.signal(());
            if let Some(next) = face.schedule().wake_time() {
                debug!("Next wake at {}", next.as_secs());
            }
        }
    }
}
