//! When the alarm should go off

use crate::time::{compute_wake_time, Timestamp, SECONDS_PER_DAY};
use crate::traits::WallClock;

/// Armed wake time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmSchedule {
    wake: Option<Timestamp>,
    repeat_daily: bool,
}

impl AlarmSchedule {
    /// A schedule that never fires
    pub const fn disarmed() -> Self {
        Self {
            wake: None,
            repeat_daily: false,
        }
    }

    /// Arm for `hour:minute:second` today
    ///
    /// If that time has already passed it is moved forward by whole days.
    /// Returns the armed wake time.
    pub fn arm<C: WallClock + ?Sized>(
        &mut self,
        clock: &C,
        hour: i32,
        minute: i32,
        second: i32,
        repeat_daily: bool,
    ) -> Timestamp {
        let now = clock.now();
        let wake = next_after(compute_wake_time(clock, hour, minute, second), now);
        self.arm_at(wake, repeat_daily);
        wake
    }

    /// Arm for an absolute time
    pub fn arm_at(&mut self, wake: Timestamp, repeat_daily: bool) {
        self.wake = Some(wake);
        self.repeat_daily = repeat_daily;
    }

    pub fn disarm(&mut self) {
        self.wake = None;
    }

    pub fn is_armed(&self) -> bool {
        self.wake.is_some()
    }

    pub fn wake_time(&self) -> Option<Timestamp> {
        self.wake
    }

    pub fn repeats_daily(&self) -> bool {
        self.repeat_daily
    }

    /// Check whether the alarm is due at `now`
    ///
    /// Returns true at most once per wake time. A daily schedule moves on
    /// to the next day after `now`; a one-shot schedule disarms.
    pub fn take_due(&mut self, now: Timestamp) -> bool {
        match self.wake {
            Some(wake) if now >= wake => {
                self.wake = if self.repeat_daily {
                    Some(next_after(wake, now))
                } else {
                    None
                };
                true
            }
            _ => false,
        }
    }
}

/// `wake` moved forward by whole days until it is after `now`
fn next_after(wake: Timestamp, now: Timestamp) -> Timestamp {
    if wake > now {
        return wake;
    }
    let behind = now.secs_since(wake);
    wake + (behind / SECONDS_PER_DAY + 1) * SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2024-01-01T00:00:00Z
    const DAY0: i64 = 1_704_067_200;
    const SEVEN_THIRTY: i64 = DAY0 + 7 * 3600 + 30 * 60;

    struct FixedClock(Timestamp);

    impl WallClock for FixedClock {
        fn now(&self) -> Timestamp {
            self.0
        }

        fn is_24h_style(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_arm_later_today() {
        let mut schedule = AlarmSchedule::disarmed();
        let wake = schedule.arm(&FixedClock(Timestamp(DAY0 + 3600)), 7, 30, 0, false);
        assert_eq!(wake, Timestamp(SEVEN_THIRTY));
        assert!(schedule.is_armed());
    }

    #[test]
    fn test_arm_after_wake_time_rolls_to_tomorrow() {
        let mut schedule = AlarmSchedule::disarmed();
        let wake = schedule.arm(&FixedClock(Timestamp(DAY0 + 10 * 3600)), 7, 30, 0, false);
        assert_eq!(wake, Timestamp(SEVEN_THIRTY + SECONDS_PER_DAY));
    }

    #[test]
    fn test_one_shot_fires_once() {
        let mut schedule = AlarmSchedule::disarmed();
        schedule.arm_at(Timestamp(SEVEN_THIRTY), false);

        assert!(!schedule.take_due(Timestamp(SEVEN_THIRTY - 1)));
        assert!(schedule.take_due(Timestamp(SEVEN_THIRTY)));
        assert!(!schedule.is_armed());
        assert!(!schedule.take_due(Timestamp(SEVEN_THIRTY + 60)));
    }

    #[test]
    fn test_daily_moves_to_next_day() {
        let mut schedule = AlarmSchedule::disarmed();
        schedule.arm_at(Timestamp(SEVEN_THIRTY), true);

        // Tick lands a few seconds late
        assert!(schedule.take_due(Timestamp(SEVEN_THIRTY + 20)));
        assert_eq!(schedule.wake_time(), Some(Timestamp(SEVEN_THIRTY + SECONDS_PER_DAY)));
        assert!(!schedule.take_due(Timestamp(SEVEN_THIRTY + 60)));
    }

    #[test]
    fn test_daily_skips_missed_days() {
        let mut schedule = AlarmSchedule::disarmed();
        schedule.arm_at(Timestamp(SEVEN_THIRTY), true);

        // Watch was off for three days
        let now = Timestamp(SEVEN_THIRTY + 3 * SECONDS_PER_DAY + 5);
        assert!(schedule.take_due(now));
        assert_eq!(
            schedule.wake_time(),
            Some(Timestamp(SEVEN_THIRTY + 4 * SECONDS_PER_DAY))
        );
    }

    #[test]
    fn test_disarmed_never_due() {
        let mut schedule = AlarmSchedule::disarmed();
        assert!(!schedule.take_due(Timestamp(i64::MAX)));
    }
}
