//! Integration tests for the trace ring buffer.

#![cfg(test)]

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;

use openvpu_trace::prelude::*;

fn small_ring(capacity: usize) -> TraceRing {
    let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
    TraceRing::with_capacity(capacity)
}

mod round_trip {
    use super::*;

    #[test]
    fn writes_below_capacity_read_back_exactly() {
        let ring = small_ring(64);
        for i in 0..10 {
            ring.record(&format!("event {i}"));
        }

        let recent = ring.dump_recent(10);
        assert_eq!(recent.len(), 10);
        for (i, record) in recent.iter().enumerate() {
            assert_eq!(record.message, format!("event {i}"));
        }
        // Timestamps are monotonic in write order.
        for pair in recent.windows(2) {
            assert!(pair[0].timestamp_ns <= pair[1].timestamp_ns);
        }
    }

    #[test]
    fn overwritten_entries_are_unrecoverable() {
        let capacity = 16;
        let extra = 5;
        let ring = small_ring(capacity);
        for i in 0..capacity + extra {
            ring.record(&format!("event {i}"));
        }

        let recent = ring.dump_recent(capacity);
        assert_eq!(recent.len(), capacity);

        let messages: Vec<_> = recent.iter().map(|r| r.message.as_str()).collect();
        for i in 0..extra {
            let discarded = format!("event {i}");
            assert!(
                !messages.contains(&discarded.as_str()),
                "discarded entry {discarded:?} must not reappear"
            );
        }
        for i in extra..capacity + extra {
            let kept = format!("event {i}");
            assert!(messages.contains(&kept.as_str()), "missing entry {kept:?}");
        }
    }

    #[test]
    fn default_print_count_fits_capacity() {
        let ring = TraceRing::new();
        assert!(TRACE_PRINT_COUNT <= ring.capacity());
        assert_eq!(ring.dump_recent(TRACE_PRINT_COUNT).len(), TRACE_PRINT_COUNT);
    }
}

mod concurrency {
    use super::*;

    #[test]
    fn concurrent_writers_never_lose_the_cursor() {
        let ring = Arc::new(TraceRing::new());
        let writers = 4;
        let per_writer = 500;

        let handles: Vec<_> = (0..writers)
            .map(|w| {
                let ring = Arc::clone(&ring);
                thread::spawn(move || {
                    for i in 0..per_writer {
                        ring.record(&format!("w{w} e{i}"));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(ring.sequence(), (writers * per_writer) as u64);
    }

    #[test]
    fn dump_during_writes_stays_well_formed() {
        let ring = Arc::new(small_ring(32));
        let writer = {
            let ring = Arc::clone(&ring);
            thread::spawn(move || {
                for i in 0..2000 {
                    ring.record(&format!("tick {i}"));
                }
            })
        };

        for _ in 0..50 {
            let recent = ring.dump_recent(32);
            assert_eq!(recent.len(), 32);
            for record in &recent {
                assert!(record.message.len() <= TRACE_MSG_MAX);
            }
        }

        writer.join().unwrap();
    }
}
