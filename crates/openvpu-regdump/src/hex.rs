//! Address-labeled hex block rendering.
//!
//! Lines carry 32 bytes as eight 32-bit words, prefixed with the byte
//! offset, matching the row/group shape the kernel log would show for the
//! same ranges.

use openvpu_device_state::RegisterSpace;

use crate::error::{RegdumpError, RegdumpResult};

/// Bytes rendered per output line.
const BYTES_PER_LINE: u32 = 32;

/// Render `len` bytes starting at byte offset `base` as an address-labeled
/// hex block, one optional `prefix` per line.
///
/// # Errors
///
/// Returns [`RegdumpError::RegionOutOfRange`] when the range exceeds the
/// mapped space, [`RegdumpError::RegisterOutOfRange`] when an individual
/// word read fails, or a formatting error from the sink.
pub fn write_hex_block<W: core::fmt::Write>(
    sink: &mut W,
    space: &dyn RegisterSpace,
    prefix: &str,
    base: u32,
    len: u32,
) -> RegdumpResult<()> {
    let end = base
        .checked_add(len)
        .ok_or_else(|| RegdumpError::region_out_of_range(base, u32::MAX, space.size_bytes()))?;
    if end > space.size_bytes() {
        return Err(RegdumpError::region_out_of_range(
            base,
            end,
            space.size_bytes(),
        ));
    }

    let mut offset = base;
    while offset < end {
        write!(sink, "{prefix}{offset:08x}:")?;
        let line_end = offset.saturating_add(BYTES_PER_LINE).min(end);
        while offset < line_end {
            let word = space
                .read_word(offset)
                .ok_or_else(|| RegdumpError::register_out_of_range(offset))?;
            write!(sink, " {word:08x}")?;
            offset = offset.saturating_add(4);
        }
        writeln!(sink)?;
    }
    Ok(())
}

/// Read one register word, promoting an unmapped offset to an error.
///
/// # Errors
///
/// Returns [`RegdumpError::RegisterOutOfRange`] when `offset` is unaligned
/// or outside the mapped space.
pub fn read_reg(space: &dyn RegisterSpace, offset: u32) -> RegdumpResult<u32> {
    space
        .read_word(offset)
        .ok_or_else(|| RegdumpError::register_out_of_range(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use openvpu_device_state::SliceRegisterSpace;

    #[test]
    fn test_full_lines() {
        let space = SliceRegisterSpace::new((0..32u32).collect());
        let mut out = String::new();
        write_hex_block(&mut out, &space, "", 0x0, 0x40).unwrap();

        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("00000000:"));
        assert!(lines[1].starts_with("00000020:"));
        assert_eq!(lines[0].split_whitespace().count(), 9);
    }

    #[test]
    fn test_partial_last_line() {
        let space = SliceRegisterSpace::zeroed(0x100);
        let mut out = String::new();
        write_hex_block(&mut out, &space, "", 0x0, 0x24).unwrap();

        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        // 0x24 - 0x20 = one word on the last line.
        assert_eq!(lines[1].split_whitespace().count(), 2);
    }

    #[test]
    fn test_prefix_on_every_line() {
        let space = SliceRegisterSpace::zeroed(0x100);
        let mut out = String::new();
        write_hex_block(&mut out, &space, "[0] plane ", 0x0, 0x40).unwrap();
        assert_eq!(out.matches("[0] plane ").count(), 2);
    }

    #[test]
    fn test_out_of_range_region() {
        let space = SliceRegisterSpace::zeroed(0x40);
        let mut out = String::new();
        let err = write_hex_block(&mut out, &space, "", 0x0, 0x80);
        assert!(matches!(err, Err(RegdumpError::RegionOutOfRange { .. })));
    }
}
