//! Per-instance codec state.

use serde::{Deserialize, Serialize};

/// Kind of codec work an instance performs.
///
/// The dumper matches exhaustively on this, so a new kind is a compile-time
/// decision point rather than a silently falling-through branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CodecKind {
    /// Bitstream decoder instance.
    Decoder,
    /// Frame encoder instance.
    Encoder,
    /// Instance whose kind was never established; a structural anomaly.
    #[default]
    Unknown,
}

impl CodecKind {
    /// Short tag used in diagnostic lines.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Decoder => "DEC",
            Self::Encoder => "ENC",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl core::fmt::Display for CodecKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A contiguous device-address range backing one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BufferRange {
    /// Device address of the first byte.
    pub addr: u64,
    /// Length in bytes.
    pub size: u64,
}

impl BufferRange {
    /// Device address one past the last byte.
    #[must_use]
    pub fn end(self) -> u64 {
        self.addr.saturating_add(self.size)
    }
}

/// Live state of one codec instance slot.
///
/// Assembled by the instance-management side of the driver; this subsystem
/// only ever reads it. Plane counts and buffer sizes describe the formats
/// the instance negotiated, and feed the instance buffer dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceState {
    /// Instance identifier (also the queue-subsystem key).
    pub id: u32,
    /// Decoder, encoder, or unknown.
    pub kind: CodecKind,
    /// Raw codec mode code (H.264, HEVC, ... as the firmware numbers them).
    pub codec_mode: u32,
    /// Raw lifecycle state code.
    pub state: u32,
    /// Whether an interrupt condition is latched for this instance.
    pub int_condition: bool,
    /// Reason code of the last interrupt.
    pub int_reason: u32,
    /// Error code of the last interrupt, 0 if none.
    pub int_err: u32,
    /// Plane count declared by the source (input) format.
    pub src_planes: u8,
    /// Plane count declared by the destination (output) format.
    pub dst_planes: u8,
    /// Per-plane raw buffer sizes in bytes.
    pub plane_sizes: [u32; 3],
    /// Motion-vector buffer size in bytes (decoder).
    pub mv_size: u32,
    /// Luma reconstruction buffer size in bytes (encoder).
    pub luma_dpb_size: u32,
    /// Chroma reconstruction buffer size in bytes (encoder).
    pub chroma_dpb_size: u32,
    /// Motion-estimation buffer size in bytes (encoder).
    pub me_buffer_size: u32,
    /// Per-instance firmware context buffer.
    pub instance_buf: BufferRange,
    /// Codec working buffer.
    pub codec_buf: BufferRange,
}

impl InstanceState {
    /// Create a minimal instance in the given role; remaining fields zeroed.
    #[must_use]
    pub fn with_kind(id: u32, kind: CodecKind) -> Self {
        Self {
            id,
            kind,
            codec_mode: 0,
            state: 0,
            int_condition: false,
            int_reason: 0,
            int_err: 0,
            src_planes: 0,
            dst_planes: 0,
            plane_sizes: [0; 3],
            mv_size: 0,
            luma_dpb_size: 0,
            chroma_dpb_size: 0,
            me_buffer_size: 0,
            instance_buf: BufferRange::default(),
            codec_buf: BufferRange::default(),
        }
    }
}
