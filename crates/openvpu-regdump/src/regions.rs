//! The static region table driving the full register dump.

/// One register-bank or buffer range to dump.
///
/// Invariant: regions in [`SFR_REGIONS`] are non-overlapping, word-aligned,
/// and lie within the mapped register space of the hardware revision this
/// table describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryRegion {
    /// Byte offset of the first word from the register base.
    pub base: u32,
    /// Length in bytes.
    pub len: u32,
}

impl MemoryRegion {
    /// One past the last byte offset, saturating.
    #[must_use]
    pub const fn end(self) -> u32 {
        self.base.saturating_add(self.len)
    }
}

/// Ordered table of control-register ranges rendered by a full dump.
pub const SFR_REGIONS: [MemoryRegion; 20] = [
    MemoryRegion { base: 0x0000, len: 0x080 },
    MemoryRegion { base: 0x1000, len: 0xCD0 },
    MemoryRegion { base: 0xF000, len: 0xFF8 },
    MemoryRegion { base: 0x2000, len: 0xA00 },
    MemoryRegion { base: 0x2F00, len: 0x06C },
    MemoryRegion { base: 0x3000, len: 0x040 },
    MemoryRegion { base: 0x3110, len: 0x010 },
    MemoryRegion { base: 0x5000, len: 0x100 },
    MemoryRegion { base: 0x5200, len: 0x300 },
    MemoryRegion { base: 0x5600, len: 0x100 },
    MemoryRegion { base: 0x5800, len: 0x100 },
    MemoryRegion { base: 0x5A00, len: 0x100 },
    MemoryRegion { base: 0x6000, len: 0x0C4 },
    MemoryRegion { base: 0x7000, len: 0x21C },
    MemoryRegion { base: 0x8000, len: 0x20C },
    MemoryRegion { base: 0x9000, len: 0x10C },
    MemoryRegion { base: 0xA000, len: 0x20C },
    MemoryRegion { base: 0xB000, len: 0x444 },
    MemoryRegion { base: 0xC000, len: 0x084 },
    MemoryRegion { base: 0xD000, len: 0x074 },
];

/// Extended firmware debug-info region, rendered only when the verbose
/// debug-info configuration flag is set.
pub const DBG_INFO_REGION: MemoryRegion = MemoryRegion {
    base: 0xE000,
    len: 0x200,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_are_word_aligned() {
        for region in SFR_REGIONS {
            assert_eq!(region.base % 4, 0, "misaligned base {:#x}", region.base);
            assert_eq!(region.len % 4, 0, "misaligned len {:#x}", region.len);
        }
    }

    #[test]
    fn test_regions_do_not_overlap() {
        let mut sorted = SFR_REGIONS;
        sorted.sort_by_key(|r| r.base);
        for pair in sorted.windows(2) {
            assert!(
                pair[0].end() <= pair[1].base,
                "regions {:#x} and {:#x} overlap",
                pair[0].base,
                pair[1].base
            );
        }
    }
}
