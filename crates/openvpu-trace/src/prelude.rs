//! Prelude for openvpu-trace.
//!
//! Re-exports the most commonly used types for convenient importing.
//!
//! # Example
//!
//! ```rust
//! use openvpu_trace::prelude::*;
//!
//! let ring = TraceRing::new();
//! ring.record("power on");
//! ```

pub use crate::ring::{TRACE_CAPACITY, TRACE_MSG_MAX, TRACE_PRINT_COUNT, TraceRecord, TraceRing};
