//! Prelude for openvpu-device-state.
//!
//! Re-exports the most commonly used types for convenient importing.
//!
//! # Example
//!
//! ```rust
//! use openvpu_device_state::prelude::*;
//!
//! let inst = InstanceState::with_kind(0, CodecKind::Decoder);
//! assert_eq!(inst.kind, CodecKind::Decoder);
//! ```

pub use crate::context::DeviceContext;
pub use crate::instance::{BufferRange, CodecKind, InstanceState};
pub use crate::snapshot::{DeviceSnapshot, InstanceSnapshot};
pub use crate::traits::{
    CommandLayer, MmuFaultReporter, PowerDomain, QueueKind, QueueSubsystem, RegisterSpace,
    SliceRegisterSpace,
};
