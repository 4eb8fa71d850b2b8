//! Property-based tests for trace ring invariants.

#![cfg(test)]

use std::num::NonZeroUsize;

use openvpu_trace::prelude::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_sequence_counts_every_write(
        writes in 0usize..512,
    ) {
        let ring = TraceRing::new();
        for i in 0..writes {
            ring.record(&format!("m{i}"));
        }
        prop_assert_eq!(ring.sequence(), writes as u64);
    }

    #[test]
    fn prop_most_recent_entry_is_last(
        capacity in 1usize..64,
        writes in 1usize..256,
    ) {
        let ring = TraceRing::with_capacity(
            NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN),
        );
        for i in 0..writes {
            ring.record(&format!("m{i}"));
        }

        let recent = ring.dump_recent(1);
        prop_assert_eq!(recent.len(), 1);
        let expected = format!("m{}", writes - 1);
        prop_assert_eq!(recent[0].message.as_str(), expected.as_str());
    }

    #[test]
    fn prop_dump_returns_at_most_capacity(
        capacity in 1usize..64,
        writes in 0usize..256,
        ask in 0usize..512,
    ) {
        let ring = TraceRing::with_capacity(
            NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN),
        );
        for i in 0..writes {
            ring.record(&format!("m{i}"));
        }
        prop_assert!(ring.dump_recent(ask).len() <= capacity);
    }

    #[test]
    fn prop_messages_never_exceed_limit(
        message in ".*",
    ) {
        let ring = TraceRing::new();
        ring.record(&message);
        let recent = ring.dump_recent(1);
        prop_assert!(recent[0].message.len() <= TRACE_MSG_MAX);
        prop_assert!(message.starts_with(recent[0].message.as_str()));
    }
}
