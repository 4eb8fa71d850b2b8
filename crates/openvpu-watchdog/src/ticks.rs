//! Lock-free watchdog tick state.
//!
//! Two atomics shared between the timer interrupt, the device interrupt
//! handler, and the watchdog worker. The interrupt handler resets the tick
//! count to prove the hardware is alive; the timer bumps it; the worker swaps
//! the `running` flag so a second invocation during an in-flight capture
//! degrades to a logged no-op.

use portable_atomic::{AtomicBool, AtomicU32, Ordering};

/// Shared tick counters for a watchdog monitor.
#[derive(Debug)]
pub struct WatchdogTicks {
    tick_count: AtomicU32,
    running: AtomicBool,
}

impl Default for WatchdogTicks {
    fn default() -> Self {
        Self::new()
    }
}

impl WatchdogTicks {
    /// Create a fresh tick state with zero ticks and no capture in flight.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tick_count: AtomicU32::new(0),
            running: AtomicBool::new(false),
        }
    }

    /// Advance the tick counter by one and return the new value.
    ///
    /// Called from the periodic timer. Wraps on overflow, which in practice
    /// never happens: the worker fires long before the counter saturates.
    pub fn advance(&self) -> u32 {
        self.tick_count
            .fetch_add(1, Ordering::AcqRel)
            .wrapping_add(1)
    }

    /// Current tick count.
    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.tick_count.load(Ordering::Acquire)
    }

    /// Reset the tick count, proving the hardware serviced an interrupt.
    pub fn record_activity(&self) {
        self.tick_count.store(0, Ordering::Release);
    }

    /// Whether a capture is already in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Claim the capture. Returns `false` if another invocation already holds
    /// it. Resets the tick count as a side effect of a successful claim.
    pub fn begin_capture(&self) -> bool {
        if self.running.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.tick_count.store(0, Ordering::Release);
        true
    }

    /// Clear both counters. Test hook; production captures never return.
    pub fn reset(&self) {
        self.tick_count.store(0, Ordering::Release);
        self.running.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_and_record_activity() {
        let ticks = WatchdogTicks::new();
        assert_eq!(ticks.advance(), 1);
        assert_eq!(ticks.advance(), 2);
        ticks.record_activity();
        assert_eq!(ticks.ticks(), 0);
    }

    #[test]
    fn test_begin_capture_claims_once() {
        let ticks = WatchdogTicks::new();
        ticks.advance();
        assert!(ticks.begin_capture());
        assert_eq!(ticks.ticks(), 0);
        assert!(!ticks.begin_capture());
        assert!(ticks.is_running());
    }

    #[test]
    fn test_reset_clears_running() {
        let ticks = WatchdogTicks::new();
        assert!(ticks.begin_capture());
        ticks.reset();
        assert!(!ticks.is_running());
        assert!(ticks.begin_capture());
    }
}
