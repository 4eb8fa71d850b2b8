//! The trace ring buffer.
//!
//! An append-only, wrap-around log of timestamped short messages. A shared
//! atomic cursor hands out slots; each slot is guarded by its own mutex so a
//! writer never contends with writers on other slots, and the dump path
//! tolerates slightly stale entries while writers are active.

use std::num::NonZeroUsize;
use std::time::Instant;

use parking_lot::Mutex;
use portable_atomic::{AtomicU64, Ordering};

/// Number of entries the default ring holds.
pub const TRACE_CAPACITY: usize = 1024;

/// Maximum recorded message length in bytes; longer messages are truncated
/// on a character boundary.
pub const TRACE_MSG_MAX: usize = 64;

/// Default number of entries rendered into a diagnostic dump.
pub const TRACE_PRINT_COUNT: usize = 30;

/// One fixed-size slot of backing storage.
///
/// Slots are recycled forever; a new write at the same index overwrites the
/// previous entry's contents (last-writer-wins).
#[derive(Debug)]
struct Slot {
    timestamp_ns: u64,
    len: u8,
    msg: [u8; TRACE_MSG_MAX],
}

impl Slot {
    const fn empty() -> Self {
        Self {
            timestamp_ns: 0,
            len: 0,
            msg: [0; TRACE_MSG_MAX],
        }
    }
}

/// An entry read back out of the ring by [`TraceRing::dump_recent`].
///
/// Unwritten slots read back as an empty message with a zero timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    /// Slot index the entry occupied.
    pub slot: usize,
    /// Monotonic timestamp in nanoseconds since ring construction.
    pub timestamp_ns: u64,
    /// The recorded message, possibly truncated to [`TRACE_MSG_MAX`] bytes.
    pub message: String,
}

/// Fixed-capacity, wrap-around trace log.
///
/// # Thread Safety
///
/// `record()` may be called from any thread, including the interrupt-side
/// command-completion path. The write cursor is advanced with a single atomic
/// fetch-add; the slot copy happens under that slot's own mutex, which is
/// uncontended unless a dump is reading the exact slot being overwritten.
///
/// # RT Safety
///
/// `record()` performs no heap allocation and no syscalls. `dump_recent()`
/// allocates the returned entries and is meant for the non-RT dump path.
pub struct TraceRing {
    slots: Box<[Mutex<Slot>]>,
    cursor: AtomicU64,
    epoch: Instant,
}

impl TraceRing {
    /// Create a ring with the default capacity of [`TRACE_CAPACITY`] entries.
    #[must_use]
    pub fn new() -> Self {
        // TRACE_CAPACITY is nonzero by construction.
        let capacity = NonZeroUsize::new(TRACE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self::with_capacity(capacity)
    }

    /// Create a ring with an explicit capacity.
    ///
    /// This is the only allocation the ring ever performs.
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        let slots = (0..capacity.get())
            .map(|_| Mutex::new(Slot::empty()))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self {
            slots,
            cursor: AtomicU64::new(0),
            epoch: Instant::now(),
        }
    }

    /// Number of slots in the ring.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Total number of records ever written.
    ///
    /// Monotonically increasing; the cursor wraps modulo capacity, the
    /// sequence does not.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.cursor.load(Ordering::Acquire)
    }

    /// Append a timestamped entry at the current write cursor.
    ///
    /// Messages longer than [`TRACE_MSG_MAX`] bytes are truncated on a
    /// character boundary. Never allocates.
    pub fn record(&self, message: &str) {
        let seq = self.cursor.fetch_add(1, Ordering::AcqRel);
        let timestamp_ns = elapsed_ns(self.epoch);
        let text = truncate_on_boundary(message, TRACE_MSG_MAX);

        let index = wrap_index(seq, self.slots.len());
        if let Some(slot) = self.slots.get(index) {
            let mut slot = slot.lock();
            slot.timestamp_ns = timestamp_ns;
            slot.len = text.len() as u8;
            slot.msg[..text.len()].copy_from_slice(text.as_bytes());
        }
    }

    /// Read back up to `n` entries ending at the most recent write.
    ///
    /// Entries are returned oldest first, most recent last (the order they
    /// are displayed in a dump). `n` is clamped to the ring capacity. Slots
    /// that have never been written read back as empty records rather than
    /// an error, matching the pre-initialization state of the hardware log.
    #[must_use]
    pub fn dump_recent(&self, n: usize) -> Vec<TraceRecord> {
        let capacity = self.slots.len();
        let n = n.min(capacity);
        let cursor = self.sequence();

        let mut out = Vec::with_capacity(n);
        for back in (0..n).rev() {
            // Walk from n-1 slots behind the cursor forward to the newest.
            let seq = cursor
                .wrapping_add(capacity as u64)
                .wrapping_sub(1 + back as u64);
            let index = wrap_index(seq, capacity);
            out.push(self.read_slot(index));
        }
        out
    }

    fn read_slot(&self, index: usize) -> TraceRecord {
        let Some(slot) = self.slots.get(index) else {
            return TraceRecord {
                slot: index,
                timestamp_ns: 0,
                message: String::new(),
            };
        };
        let slot = slot.lock();
        let len = usize::from(slot.len).min(TRACE_MSG_MAX);
        let message = String::from_utf8_lossy(&slot.msg[..len]).into_owned();
        TraceRecord {
            slot: index,
            timestamp_ns: slot.timestamp_ns,
            message,
        }
    }
}

impl Default for TraceRing {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TraceRing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceRing")
            .field("capacity", &self.slots.len())
            .field("sequence", &self.sequence())
            .finish()
    }
}

fn wrap_index(seq: u64, capacity: usize) -> usize {
    (seq % capacity.max(1) as u64) as usize
}

fn elapsed_ns(epoch: Instant) -> u64 {
    u64::try_from(epoch.elapsed().as_nanos()).unwrap_or(u64::MAX)
}

/// Truncate `s` to at most `max` bytes without splitting a character.
fn truncate_on_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    s.get(..end).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ring_is_empty() {
        let ring = TraceRing::new();
        assert_eq!(ring.capacity(), TRACE_CAPACITY);
        assert_eq!(ring.sequence(), 0);
    }

    #[test]
    fn test_record_advances_sequence() {
        let ring = TraceRing::new();
        ring.record("one");
        ring.record("two");
        assert_eq!(ring.sequence(), 2);
    }

    #[test]
    fn test_dump_preserves_message_and_order() {
        let ring = TraceRing::new();
        ring.record("first");
        ring.record("second");
        ring.record("third");

        let recent = ring.dump_recent(3);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].message, "first");
        assert_eq!(recent[1].message, "second");
        assert_eq!(recent[2].message, "third");
        assert!(recent[0].timestamp_ns <= recent[1].timestamp_ns);
        assert!(recent[1].timestamp_ns <= recent[2].timestamp_ns);
    }

    #[test]
    fn test_unwritten_slots_read_back_empty() {
        let ring = TraceRing::new();
        ring.record("only");

        let recent = ring.dump_recent(3);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].message, "");
        assert_eq!(recent[0].timestamp_ns, 0);
        assert_eq!(recent[2].message, "only");
    }

    #[test]
    fn test_truncation_on_char_boundary() {
        let ring = TraceRing::new();
        let long = "é".repeat(TRACE_MSG_MAX); // 2 bytes per char
        ring.record(&long);

        let recent = ring.dump_recent(1);
        assert!(recent[0].message.len() <= TRACE_MSG_MAX);
        assert!(recent[0].message.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_small_capacity_wraps() {
        let capacity = NonZeroUsize::new(4).unwrap_or(NonZeroUsize::MIN);
        let ring = TraceRing::with_capacity(capacity);
        for i in 0..6 {
            ring.record(&format!("msg {i}"));
        }

        let recent = ring.dump_recent(4);
        let messages: Vec<_> = recent.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, ["msg 2", "msg 3", "msg 4", "msg 5"]);
    }

    #[test]
    fn test_dump_clamps_to_capacity() {
        let capacity = NonZeroUsize::new(8).unwrap_or(NonZeroUsize::MIN);
        let ring = TraceRing::with_capacity(capacity);
        ring.record("x");
        assert_eq!(ring.dump_recent(100).len(), 8);
    }
}
