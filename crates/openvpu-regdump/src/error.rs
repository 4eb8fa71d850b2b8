//! Error types for register dump operations.
//!
//! A region outside the mapped space is a precondition violation of the
//! static region table, not a recoverable condition; the capture path that
//! calls into this crate is already on its way to a fatal stop and treats
//! any of these as part of that episode.

use thiserror::Error;

/// Errors that can occur while rendering a register or buffer dump.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegdumpError {
    /// A region from the static table exceeds the mapped register space.
    #[error("register region [{base:#06x} .. {end:#06x}] exceeds mapped space of {space} bytes")]
    RegionOutOfRange {
        /// First byte offset of the offending region.
        base: u32,
        /// One past the last byte offset of the offending region.
        end: u32,
        /// Size of the mapped space in bytes.
        space: u32,
    },

    /// A single register read fell outside the mapped space.
    #[error("register read at {offset:#06x} outside mapped space")]
    RegisterOutOfRange {
        /// Byte offset of the offending read.
        offset: u32,
    },

    /// The diagnostic sink rejected output.
    #[error("formatting diagnostic output failed")]
    Format(#[from] core::fmt::Error),
}

impl RegdumpError {
    /// Create a region-out-of-range error.
    #[must_use]
    pub fn region_out_of_range(base: u32, end: u32, space: u32) -> Self {
        Self::RegionOutOfRange { base, end, space }
    }

    /// Create a register-out-of-range error.
    #[must_use]
    pub fn register_out_of_range(offset: u32) -> Self {
        Self::RegisterOutOfRange { offset }
    }
}

/// A specialized `Result` type for register dump operations.
pub type RegdumpResult<T> = core::result::Result<T, RegdumpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegdumpError::region_out_of_range(0xF000, 0x10000, 0x8000);
        assert!(err.to_string().contains("0xf000"));
        assert!(err.to_string().contains("32768 bytes"));

        let err = RegdumpError::register_out_of_range(0x20);
        assert!(err.to_string().contains("0x0020"));
    }
}
