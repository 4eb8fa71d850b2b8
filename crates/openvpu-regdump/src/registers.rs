//! Buffer-register offsets in the decoder and encoder banks.
//!
//! Byte offsets from the register base, all within the 0xF000 codec bank of
//! the static region table.

/// Decoder compressed-input (CPB) buffer address.
pub const D_CPB_BUFFER_ADDR: u32 = 0xF5B0;
/// Decoder compressed-input (CPB) buffer size.
pub const D_CPB_BUFFER_SIZE: u32 = 0xF5B4;
/// Decoder scratch buffer address.
pub const D_SCRATCH_BUFFER_ADDR: u32 = 0xF560;
/// Decoder scratch buffer size.
pub const D_SCRATCH_BUFFER_SIZE: u32 = 0xF564;
/// Decoder static (reference) buffer address.
pub const D_STATIC_BUFFER_ADDR: u32 = 0xF570;
/// Decoder static (reference) buffer size.
pub const D_STATIC_BUFFER_SIZE: u32 = 0xF574;

/// First decoder output-plane address window.
pub const D_FIRST_PLANE_DPB0: u32 = 0xF160;
/// Second decoder output-plane address window.
pub const D_SECOND_PLANE_DPB0: u32 = 0xF260;
/// Third decoder output-plane address window (3-plane formats only).
pub const D_THIRD_PLANE_DPB0: u32 = 0xF360;
/// Decoder motion-vector buffer address window.
pub const D_MV_BUFFER0: u32 = 0xF460;
/// Length of each decoder address window in bytes.
pub const D_PLANE_WINDOW_LEN: u32 = 0x100;

/// Encoder source-plane buffer addresses, in plane order.
pub const E_SOURCE_ADDRS: [u32; 3] = [0xF9E0, 0xF9E4, 0xF9E8];
/// Encoder destination stream buffer address.
pub const E_STREAM_BUFFER_ADDR: u32 = 0xF9EC;
/// Encoder destination stream buffer size.
pub const E_STREAM_BUFFER_SIZE: u32 = 0xF9F0;
/// Encoder scratch buffer address.
pub const E_SCRATCH_BUFFER_ADDR: u32 = 0xF9F4;
/// Encoder scratch buffer size.
pub const E_SCRATCH_BUFFER_SIZE: u32 = 0xF9F8;

/// Encoder luma reconstruction buffer address window.
pub const E_LUMA_DPB: u32 = 0xFA00;
/// Encoder chroma reconstruction buffer address window.
pub const E_CHROMA_DPB: u32 = 0xFB00;
/// Encoder motion-estimation buffer address window.
pub const E_ME_BUFFER: u32 = 0xFC00;
/// Length of each encoder address window in bytes.
pub const E_DPB_WINDOW_LEN: u32 = 0x44;
