//! # openvpu-device-state
//!
//! Device context, collaborator seams and the diagnostic state snapshot for
//! the OpenVPU codec accelerator driver.
//!
//! The watchdog and the register dumper never talk to hardware subsystems
//! directly; they consume the collaborator traits defined here (power/clock
//! domain, command layer, queue subsystem, MMU fault reporting, the mapped
//! register space) through an explicit [`DeviceContext`] passed by reference
//! into every entry point. `DeviceSnapshot` assembles a read-only view of
//! that context on demand during a crash dump.
//!
//! ## Consistency Model
//!
//! Snapshot capture is advisory, not transactional: it reads whatever state
//! exists at the instant it runs and tolerates concurrent mutation by the
//! rest of the driver. Absent instance slots are skipped, never an error.
//!
//! ## Example
//!
//! ```rust
//! use openvpu_device_state::prelude::*;
//!
//! let space = SliceRegisterSpace::zeroed(0x1000);
//! assert_eq!(space.read_word(0x0), Some(0));
//! assert_eq!(space.read_word(0x2000), None);
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

pub mod context;
pub mod instance;
pub mod prelude;
pub mod snapshot;
pub mod traits;

pub use context::DeviceContext;
pub use instance::{BufferRange, CodecKind, InstanceState};
pub use snapshot::{DeviceSnapshot, InstanceSnapshot};
pub use traits::{
    CommandLayer, MmuFaultReporter, PowerDomain, QueueKind, QueueSubsystem, RegisterSpace,
    SliceRegisterSpace,
};
