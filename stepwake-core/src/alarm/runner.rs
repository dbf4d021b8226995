//! Blocking alarm runner

use embedded_hal::delay::DelayNs;

use super::session::{AlarmOutcome, AlarmSession, Progress, StopReason};
use super::stop::StopFlag;
use crate::config::AlarmConfig;
use crate::fmt::{info, warn};
use crate::traits::{StepCounter, Vibrator, WallClock};

/// Granularity at which the stop flag is checked while sleeping
pub const CANCEL_POLL_MS: u32 = 100;

/// Run the alarm to completion, blocking the caller
///
/// Each iteration emits one pulse, samples the steps walked since the
/// alarm started and then sleeps for the pulse interval. The run ends
/// when the step goal is met, after `max_tries` pulses, or when `stop` is
/// raised. No sleep follows the final pulse, so the call returns within
/// `max_tries * pulse_interval_s` seconds whatever the sensor reports.
pub fn run_alarm<C, S, V, D>(
    config: &AlarmConfig,
    clock: &C,
    steps: &mut S,
    vibe: &mut V,
    delay: &mut D,
    stop: &StopFlag,
) -> AlarmOutcome
where
    C: WallClock + ?Sized,
    S: StepCounter + ?Sized,
    V: Vibrator + ?Sized,
    D: DelayNs + ?Sized,
{
    let start = clock.now();
    let initial = steps.step_count_since(start, start);
    if initial.is_err() {
        warn!("Step data unavailable at alarm start, counting from zero");
    }

    let mut session = AlarmSession::begin(start, initial);
    info!(
        "Alarm started: goal {} steps, up to {} pulses",
        config.step_goal, config.max_tries
    );

    let outcome = loop {
        if stop.is_raised() {
            break session.finish(StopReason::Cancelled);
        }
        if let Some(reason) = session.before_pulse(config) {
            break session.finish(reason);
        }

        if let Progress::Finished(reason) =
            pulse_and_sample(&mut session, config, clock, steps, vibe)
        {
            break session.finish(reason);
        }

        if sleep_unless_stopped(delay, config.pulse_interval_ms(), stop) {
            vibe.cancel();
            break session.finish(StopReason::Cancelled);
        }
    };

    info!(
        "Alarm finished: {:?} after {} pulses, {} steps",
        outcome.reason, outcome.tries, outcome.steps_walked
    );
    outcome
}

/// One alarm iteration: pulse, then sample the steps walked so far
///
/// Each unavailable reading is logged. Used by [`run_alarm`] and by
/// callers that drive the session from their own timer.
pub fn pulse_and_sample<C, S, V>(
    session: &mut AlarmSession,
    config: &AlarmConfig,
    clock: &C,
    steps: &mut S,
    vibe: &mut V,
) -> Progress
where
    C: WallClock + ?Sized,
    S: StepCounter + ?Sized,
    V: Vibrator + ?Sized,
{
    vibe.pulse(config.pattern);

    let reading = steps.step_count_since(session.start_time(), clock.now());
    if reading.is_err() {
        warn!("Step data unavailable, alarm continues on timeout only");
    }
    session.record_sample(reading, config)
}

/// Sleep for `total_ms` in slices, returning true if `stop` was raised
fn sleep_unless_stopped<D: DelayNs + ?Sized>(delay: &mut D, total_ms: u32, stop: &StopFlag) -> bool {
    let mut remaining = total_ms;
    while remaining > 0 {
        if stop.is_raised() {
            return true;
        }
        let slice = remaining.min(CANCEL_POLL_MS);
        delay.delay_ms(slice);
        remaining -= slice;
    }
    stop.is_raised()
}
