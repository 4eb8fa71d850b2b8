//! Fatal halt policy.
//!
//! The watchdog never recovers a hung device: once the diagnostics are on the
//! record the process must stop so the supervisor can restart the driver from
//! a clean state. The policy is a trait seam so tests can substitute a halt
//! that unwinds instead of killing the test harness.

/// How the monitor stops the process after a capture.
pub trait HaltPolicy {
    /// Halt execution. Must not return.
    fn halt(&self) -> !;
}

/// Production halt policy: abort the process.
///
/// Aborting rather than exiting skips destructors and atexit handlers, which
/// may themselves touch the hung device.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbortHalt;

impl HaltPolicy for AbortHalt {
    fn halt(&self) -> ! {
        std::process::abort()
    }
}
