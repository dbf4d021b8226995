//! Alarm task
//!
//! Waits for the wake trigger, then pulses the motor until enough steps
//! have been walked, the pulse budget runs out, or the dismiss button is
//! pressed.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::Timer;

use stepwake_core::alarm::{pulse_and_sample, AlarmOutcome, AlarmSession, Progress, StopReason};
use stepwake_core::config::AlarmConfig;
use stepwake_core::time::Timestamp;
use stepwake_core::traits::{SensorError, StepCounter, Vibrator, WallClock};

use crate::channels::{ALARM_CANCEL, ALARM_TRIGGER, STEP_LOG};
use crate::clock::RtcClock;
use crate::tasks::vibe::SignalVibrator;

/// Alarm task - one session per trigger
#[embassy_executor::task]
pub async fn alarm_task(clock: &'static RtcClock, config: AlarmConfig) {
    info!("Alarm task started");

    let mut vibe = SignalVibrator;

    loop {
        ALARM_TRIGGER.wait().await;
        // Presses made while idle do not count
        ALARM_CANCEL.reset();

        let outcome = run_session(clock, &config, &mut vibe).await;
        info!(
            "Alarm finished: {:?} after {} pulses, {} steps",
            outcome.reason, outcome.tries, outcome.steps_walked
        );
        if outcome.sensor_misses > 0 {
            warn!("{} step samples were unavailable", outcome.sensor_misses);
        }
    }
}

async fn run_session(
    clock: &RtcClock,
    config: &AlarmConfig,
    vibe: &mut SignalVibrator,
) -> AlarmOutcome {
    let start = clock.now();
    let initial = SharedStepLog.step_count_since(start, start);
    if initial.is_err() {
        warn!("Step data unavailable at alarm start, counting from zero");
    }

    let mut session = AlarmSession::begin(start, initial);
    info!(
        "Alarm started: goal {} steps, up to {} pulses",
        config.step_goal, config.max_tries
    );

    loop {
        if let Some(reason) = session.before_pulse(config) {
            return session.finish(reason);
        }

        if let Progress::Finished(reason) =
            pulse_and_sample(&mut session, config, clock, &mut SharedStepLog, vibe)
        {
            return session.finish(reason);
        }
        debug!(
            "Pulse {}: {} steps walked",
            session.try_count(),
            session.steps_walked()
        );

        match select(
            Timer::after_millis(config.pulse_interval_ms() as u64),
            ALARM_CANCEL.wait(),
        )
        .await
        {
            Either::First(()) => {}
            Either::Second(()) => {
                vibe.cancel();
                return session.finish(StopReason::Cancelled);
            }
        }
    }
}

/// Step counter view of the log filled by the pedometer task
struct SharedStepLog;

impl StepCounter for SharedStepLog {
    fn step_count_since(&mut self, start: Timestamp, end: Timestamp) -> Result<u32, SensorError> {
        STEP_LOG.lock(|log| log.borrow_mut().step_count_since(start, end))
    }
}
