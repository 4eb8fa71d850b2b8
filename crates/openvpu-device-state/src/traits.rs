//! Collaborator seams consumed by the watchdog and the dumpers.
//!
//! These traits are the boundary to subsystems this crate queries but does
//! not own: the power/clock domain, the command layer, buffer queues, MMU
//! fault reporting, and the memory-mapped register space.

use serde::{Deserialize, Serialize};

/// Power and clock domain management, queried for liveness evidence.
pub trait PowerDomain: Send + Sync {
    /// Current power reference count; zero means the device is powered down.
    fn power_ref_count(&self) -> u32;

    /// Current clock reference count; zero means the clocks are gated.
    fn clock_ref_count(&self) -> u32;

    /// Force every device clock on so the register space is readable.
    ///
    /// Invoked once before a register dump; the device is about to be
    /// abandoned, so the extra draw does not matter.
    fn enable_all_clocks(&self);
}

/// Command submission layer, queried for an in-flight command.
pub trait CommandLayer: Send + Sync {
    /// Identifier of the command currently awaiting completion, or 0 if none.
    fn pending_command(&self) -> u32;
}

/// Which per-instance buffer queue to inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueueKind {
    /// Source (input) buffer queue.
    Source,
    /// Destination (output) buffer queue.
    Destination,
}

/// Buffer queue subsystem, queried for per-instance queue depths.
pub trait QueueSubsystem: Send + Sync {
    /// Number of buffers currently queued for `instance_id` on `queue`.
    fn queue_depth(&self, instance_id: u32, queue: QueueKind) -> u32;
}

/// Memory-management-unit fault reporting.
pub trait MmuFaultReporter: Send + Sync {
    /// Render the MMU fault status into `sink`.
    ///
    /// # Errors
    ///
    /// Propagates formatting errors from the sink.
    fn write_fault_status(&self, sink: &mut dyn core::fmt::Write) -> core::fmt::Result;
}

/// Read-only view over the device's mapped register space.
///
/// Reads of status and address registers are assumed side-effect-free; no
/// method on this trait may write to the hardware.
pub trait RegisterSpace: Send + Sync {
    /// Read the 32-bit word at `offset` bytes from the register base.
    ///
    /// Returns `None` when `offset` is unaligned or outside the mapped
    /// space. Callers that iterate the static region table treat `None` as a
    /// fatal precondition violation, not a recoverable condition.
    fn read_word(&self, offset: u32) -> Option<u32>;

    /// Size of the mapped space in bytes.
    fn size_bytes(&self) -> u32;
}

/// Software register space backed by a word vector.
///
/// The hardware-free model of the register bank, used by tests and by
/// environments without a mapped device (the same role the software watchdog
/// plays for the hardware watchdog elsewhere in the stack).
#[derive(Debug, Clone)]
pub struct SliceRegisterSpace {
    words: Vec<u32>,
}

impl SliceRegisterSpace {
    /// Wrap an existing word vector.
    #[must_use]
    pub fn new(words: Vec<u32>) -> Self {
        Self { words }
    }

    /// Create a zero-filled space of `size_bytes` (rounded down to words).
    #[must_use]
    pub fn zeroed(size_bytes: u32) -> Self {
        Self {
            words: vec![0; (size_bytes / 4) as usize],
        }
    }

    /// Set the word at `offset` bytes; returns false when out of range or
    /// unaligned.
    pub fn write_word(&mut self, offset: u32, value: u32) -> bool {
        if offset % 4 != 0 {
            return false;
        }
        match self.words.get_mut((offset / 4) as usize) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

impl RegisterSpace for SliceRegisterSpace {
    fn read_word(&self, offset: u32) -> Option<u32> {
        if offset % 4 != 0 {
            return None;
        }
        self.words.get((offset / 4) as usize).copied()
    }

    fn size_bytes(&self) -> u32 {
        (self.words.len() as u32).saturating_mul(4)
    }
}
