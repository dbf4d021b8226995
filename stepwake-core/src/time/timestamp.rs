//! Absolute time in whole seconds

use core::ops::{Add, Sub};

/// Seconds in one calendar day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Seconds since the Unix epoch (1970-01-01T00:00:00)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// The epoch itself
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Create from epoch seconds
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Epoch seconds
    pub const fn as_secs(&self) -> i64 {
        self.0
    }

    /// Seconds elapsed from `earlier` to `self` (negative if `earlier` is later)
    pub const fn secs_since(&self, earlier: Timestamp) -> i64 {
        self.0 - earlier.0
    }

    /// Seconds until the next whole minute (1..=60)
    pub const fn secs_to_next_minute(&self) -> i64 {
        60 - self.0.rem_euclid(60)
    }
}

impl Add<i64> for Timestamp {
    type Output = Timestamp;

    fn add(self, secs: i64) -> Timestamp {
        Timestamp(self.0.saturating_add(secs))
    }
}

impl Sub<i64> for Timestamp {
    type Output = Timestamp;

    fn sub(self, secs: i64) -> Timestamp {
        Timestamp(self.0.saturating_sub(secs))
    }
}
