//! Prelude for openvpu-regdump.
//!
//! Re-exports the most commonly used items for convenient importing.

pub use crate::dump::{dump_all, dump_buffer_info, dump_instance_buffers};
pub use crate::error::{RegdumpError, RegdumpResult};
pub use crate::hex::{read_reg, write_hex_block};
pub use crate::regions::{DBG_INFO_REGION, MemoryRegion, SFR_REGIONS};
