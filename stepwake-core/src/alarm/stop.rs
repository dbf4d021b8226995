//! Cancellation flag for a running alarm

use core::sync::atomic::{AtomicBool, Ordering};

/// Raised by whoever wants the alarm to stop early
///
/// Only plain loads and stores are used, so this also works on cores
/// without compare-and-swap.
#[derive(Debug, Default)]
pub struct StopFlag {
    raised: AtomicBool,
}

impl StopFlag {
    /// Create a lowered flag
    pub const fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
        }
    }

    /// Request the alarm to stop
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    /// Lower the flag before the next run
    pub fn clear(&self) {
        self.raised.store(false, Ordering::Release);
    }

    /// Check whether a stop was requested
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}
