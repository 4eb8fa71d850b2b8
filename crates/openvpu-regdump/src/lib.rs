//! # openvpu-regdump
//!
//! Control-register and buffer-region hex dumper for the OpenVPU codec
//! accelerator driver.
//!
//! When the watchdog confirms a timeout, this crate renders the raw forensic
//! evidence: every range of the control-register space from a static region
//! table, plus the buffer windows relevant to the instance that owned the
//! hardware (which windows are relevant depends on whether it was decoding
//! or encoding). The MMU fault handler uses the same rendering for targeted
//! dumps outside the watchdog path.
//!
//! All operations here only read memory-mapped state; status and address
//! register reads are side-effect-free on this hardware.
//!
//! ## Example
//!
//! ```rust
//! use openvpu_device_state::SliceRegisterSpace;
//! use openvpu_regdump::hex::write_hex_block;
//!
//! let space = SliceRegisterSpace::zeroed(0x100);
//! let mut out = String::new();
//! write_hex_block(&mut out, &space, "", 0x0, 0x40)?;
//! assert!(out.starts_with("00000000:"));
//! # Ok::<(), openvpu_regdump::RegdumpError>(())
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

pub mod dump;
pub mod error;
pub mod hex;
pub mod prelude;
pub mod regions;
pub mod registers;

pub use dump::{dump_all, dump_buffer_info, dump_instance_buffers};
pub use error::{RegdumpError, RegdumpResult};
pub use regions::{DBG_INFO_REGION, MemoryRegion, SFR_REGIONS};
