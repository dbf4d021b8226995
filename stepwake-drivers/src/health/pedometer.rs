//! Timestamped step log
//!
//! Pedometer ICs (BMA4xx, LIS2DS, ...) raise an interrupt per detected
//! step. The firmware timestamps each interrupt and records it here, which
//! lets the alarm ask how many steps fell inside an arbitrary interval.
//!
//! Steps are grouped into one-second buckets, each holding the running
//! step total at the end of that second. A window's count is the
//! difference of two running totals, so it is exact however many steps
//! were taken, as long as the window starts inside the `N` most recent
//! active seconds. Windows reaching further back undercount.

use heapless::Deque;
use stepwake_core::time::Timestamp;
use stepwake_core::traits::{SensorError, StepCounter};

/// Default capacity in active seconds
pub const DEFAULT_STEP_LOG_LEN: usize = 256;

/// Seconds with at least one step, and the running total after each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bucket {
    at: Timestamp,
    total: u32,
}

/// Ring of recent per-second step totals
#[derive(Debug, Clone)]
pub struct StepLog<const N: usize = DEFAULT_STEP_LOG_LEN> {
    buckets: Deque<Bucket, N>,
    /// Steps recorded since power-up (wraps)
    total: u32,
    /// Running total of the newest bucket no longer retained
    evicted_total: u32,
    /// Sensor initialised and reporting
    available: bool,
}

impl<const N: usize> Default for StepLog<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StepLog<N> {
    /// Create an empty log; the sensor counts as unavailable until
    /// [`set_available`](Self::set_available) is called
    pub const fn new() -> Self {
        Self {
            buckets: Deque::new(),
            total: 0,
            evicted_total: 0,
            available: false,
        }
    }

    /// Mark the sensor as present (or lost)
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Record one step at `at`
    ///
    /// Steps must arrive in time order; one stamped earlier than the
    /// newest bucket is folded into that bucket.
    pub fn record_step(&mut self, at: Timestamp) {
        self.total = self.total.wrapping_add(1);

        if let Some(newest) = self.buckets.back_mut() {
            if at <= newest.at {
                newest.total = self.total;
                return;
            }
        }

        if self.buckets.is_full() {
            if let Some(dropped) = self.buckets.pop_front() {
                self.evicted_total = dropped.total;
            }
        }
        // Cannot fail: room was made above
        let _ = self.buckets.push_back(Bucket {
            at,
            total: self.total,
        });
    }

    /// Steps recorded since power-up
    pub fn total_steps(&self) -> u32 {
        self.total
    }

    /// Timestamp of the oldest retained step
    pub fn oldest(&self) -> Option<Timestamp> {
        self.buckets.front().map(|bucket| bucket.at)
    }

    /// Forget every recorded step
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.evicted_total = self.total;
    }

    /// Running total at the end of second `at`
    fn total_through(&self, at: Timestamp) -> u32 {
        self.buckets
            .iter()
            .take_while(|bucket| bucket.at <= at)
            .last()
            .map_or(self.evicted_total, |bucket| bucket.total)
    }
}

impl<const N: usize> StepCounter for StepLog<N> {
    fn step_count_since(&mut self, start: Timestamp, end: Timestamp) -> Result<u32, SensorError> {
        if !self.available {
            return Err(SensorError::Unavailable);
        }
        if end < start {
            return Ok(0);
        }

        let before = self.total_through(start - 1);
        Ok(self.total_through(end).wrapping_sub(before))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_until_enabled() {
        let mut log: StepLog<8> = StepLog::new();
        log.record_step(Timestamp(10));
        assert_eq!(
            log.step_count_since(Timestamp(0), Timestamp(20)),
            Err(SensorError::Unavailable)
        );

        log.set_available(true);
        assert_eq!(log.step_count_since(Timestamp(0), Timestamp(20)), Ok(1));
    }

    #[test]
    fn test_interval_is_inclusive() {
        let mut log: StepLog<8> = StepLog::new();
        log.set_available(true);
        for t in [5, 10, 15, 20, 25] {
            log.record_step(Timestamp(t));
        }

        assert_eq!(log.step_count_since(Timestamp(10), Timestamp(20)), Ok(3));
        assert_eq!(log.step_count_since(Timestamp(11), Timestamp(19)), Ok(1));
        assert_eq!(log.step_count_since(Timestamp(30), Timestamp(40)), Ok(0));
        // Same instant at both ends
        assert_eq!(log.step_count_since(Timestamp(15), Timestamp(15)), Ok(1));
    }

    #[test]
    fn test_full_log_drops_oldest() {
        let mut log: StepLog<4> = StepLog::new();
        log.set_available(true);
        for t in 0..6 {
            log.record_step(Timestamp(t));
        }

        assert_eq!(log.total_steps(), 6);
        assert_eq!(log.oldest(), Some(Timestamp(2)));
        assert_eq!(log.step_count_since(Timestamp(0), Timestamp(10)), Ok(4));
    }

    #[test]
    fn test_counts_beyond_capacity_in_window() {
        let mut log: StepLog = StepLog::new();
        log.set_available(true);
        // 300 steps over 90 s, a few per second
        for i in 0..300 {
            log.record_step(Timestamp(1000 + i * 90 / 300));
        }

        assert_eq!(log.step_count_since(Timestamp(1000), Timestamp(1090)), Ok(300));
        assert_eq!(log.step_count_since(Timestamp(1000), Timestamp(1000)), Ok(4));
        assert_eq!(log.total_steps(), 300);
    }

    #[test]
    fn test_same_second_steps_share_bucket() {
        let mut log: StepLog<2> = StepLog::new();
        log.set_available(true);
        for t in [7, 7, 7, 8, 8] {
            log.record_step(Timestamp(t));
        }

        assert_eq!(log.oldest(), Some(Timestamp(7)));
        assert_eq!(log.step_count_since(Timestamp(7), Timestamp(7)), Ok(3));
        assert_eq!(log.step_count_since(Timestamp(8), Timestamp(9)), Ok(2));
        assert_eq!(log.step_count_since(Timestamp(9), Timestamp(8)), Ok(0));
    }

    #[test]
    fn test_clear() {
        let mut log: StepLog<4> = StepLog::new();
        log.set_available(true);
        log.record_step(Timestamp(1));
        log.clear();
        assert_eq!(log.oldest(), None);
        assert_eq!(log.step_count_since(Timestamp(0), Timestamp(10)), Ok(0));
        // Lifetime total survives
        assert_eq!(log.total_steps(), 1);
    }
}
