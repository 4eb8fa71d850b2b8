//! # openvpu-trace
//!
//! Fixed-capacity diagnostic trace ring buffer for the OpenVPU codec driver.
//!
//! Driver code records short timestamped messages from any thread during
//! normal operation; the watchdog reads the most recent entries back when it
//! captures a crash dump. The ring is the only historical record that
//! survives to the forensic output, so recording must be cheap enough to
//! sprinkle everywhere.
//!
//! ## Safety Guarantees
//!
//! - **No heap allocations** in `record()` after construction
//! - **No unbounded blocking**: the only lock is a per-slot mutex held for a
//!   bounded copy, contended only when a dump races a writer on the same slot
//! - **Fixed storage**: capacity entries allocated once, recycled forever
//!
//! ## Example
//!
//! ```rust
//! use openvpu_trace::TraceRing;
//!
//! let ring = TraceRing::new();
//! ring.record("firmware loaded");
//! ring.record("instance 0 opened");
//!
//! let recent = ring.dump_recent(2);
//! assert_eq!(recent.len(), 2);
//! assert_eq!(recent[1].message, "instance 0 opened");
//! ```

#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod prelude;
pub mod ring;

pub use ring::{TRACE_CAPACITY, TRACE_MSG_MAX, TRACE_PRINT_COUNT, TraceRecord, TraceRing};
