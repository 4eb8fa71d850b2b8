//! Full-space and per-instance dump routines.

use openvpu_device_state::{CodecKind, DeviceContext, InstanceState};

use crate::error::RegdumpResult;
use crate::hex::{read_reg, write_hex_block};
use crate::regions::{DBG_INFO_REGION, SFR_REGIONS};
use crate::registers;

/// Render every range of the static region table as an address-labeled hex
/// block, plus the debug-info region when `include_debug_info` is set.
///
/// Forces all device clocks on first so the register space is readable on a
/// wedged device. Reads only; never writes a register.
///
/// # Errors
///
/// Returns an error when a region violates the mapped-space precondition or
/// the sink rejects output.
pub fn dump_all<W: core::fmt::Write>(
    sink: &mut W,
    ctx: &DeviceContext<'_>,
    include_debug_info: bool,
) -> RegdumpResult<()> {
    writeln!(
        sink,
        "----------- dumping VPU registers (mapped {} bytes)",
        ctx.regs.size_bytes()
    )?;

    ctx.pm.enable_all_clocks();

    for region in SFR_REGIONS {
        writeln!(sink, "[{:04X} .. {:04X}]", region.base, region.end())?;
        write_hex_block(sink, ctx.regs, "", region.base, region.len)?;
        writeln!(sink, "...")?;
    }

    if include_debug_info {
        writeln!(sink, "[DBG INFO dump]")?;
        write_hex_block(sink, ctx.regs, "", DBG_INFO_REGION.base, DBG_INFO_REGION.len)?;
        writeln!(sink, "...")?;
    }

    Ok(())
}

/// Render the buffer descriptors and address windows relevant to one
/// instance, branching on its codec kind.
///
/// An instance of unknown kind produces exactly one diagnostic line and no
/// region dumps; the structural anomaly is recorded, never escalated.
///
/// # Errors
///
/// Returns an error when a register read falls outside the mapped space or
/// the sink rejects output.
pub fn dump_instance_buffers<W: core::fmt::Write>(
    sink: &mut W,
    ctx: &DeviceContext<'_>,
    inst: &InstanceState,
) -> RegdumpResult<()> {
    match inst.kind {
        CodecKind::Decoder => dump_decoder_buffers(sink, ctx, inst),
        CodecKind::Encoder => dump_encoder_buffers(sink, ctx, inst),
        CodecKind::Unknown => {
            writeln!(sink, "invalid VPU instance type ({})", inst.kind)?;
            Ok(())
        }
    }
}

fn dump_decoder_buffers<W: core::fmt::Write>(
    sink: &mut W,
    ctx: &DeviceContext<'_>,
    inst: &InstanceState,
) -> RegdumpResult<()> {
    writeln!(
        sink,
        "Decoder CPB:{:#x}++{:#x}, scratch:{:#x}++{:#x}, static:{:#x}++{:#x}",
        read_reg(ctx.regs, registers::D_CPB_BUFFER_ADDR)?,
        read_reg(ctx.regs, registers::D_CPB_BUFFER_SIZE)?,
        read_reg(ctx.regs, registers::D_SCRATCH_BUFFER_ADDR)?,
        read_reg(ctx.regs, registers::D_SCRATCH_BUFFER_SIZE)?,
        read_reg(ctx.regs, registers::D_STATIC_BUFFER_ADDR)?,
        read_reg(ctx.regs, registers::D_STATIC_BUFFER_SIZE)?,
    )?;
    writeln!(
        sink,
        "DPB [0]plane:++{:#x}, [1]plane:++{:#x}, [2]plane:++{:#x}, MV buffer:++{:#x}",
        inst.plane_sizes[0], inst.plane_sizes[1], inst.plane_sizes[2], inst.mv_size,
    )?;

    write_hex_block(
        sink,
        ctx.regs,
        "[0] plane ",
        registers::D_FIRST_PLANE_DPB0,
        registers::D_PLANE_WINDOW_LEN,
    )?;
    write_hex_block(
        sink,
        ctx.regs,
        "[1] plane ",
        registers::D_SECOND_PLANE_DPB0,
        registers::D_PLANE_WINDOW_LEN,
    )?;
    if inst.dst_planes == 3 {
        write_hex_block(
            sink,
            ctx.regs,
            "[2] plane ",
            registers::D_THIRD_PLANE_DPB0,
            registers::D_PLANE_WINDOW_LEN,
        )?;
    }
    write_hex_block(
        sink,
        ctx.regs,
        "MV buffer ",
        registers::D_MV_BUFFER0,
        registers::D_PLANE_WINDOW_LEN,
    )?;
    Ok(())
}

fn dump_encoder_buffers<W: core::fmt::Write>(
    sink: &mut W,
    ctx: &DeviceContext<'_>,
    inst: &InstanceState,
) -> RegdumpResult<()> {
    // Only the planes the input format declares carry meaningful addresses.
    let planes = usize::from(inst.src_planes).min(registers::E_SOURCE_ADDRS.len());
    write!(sink, "Encoder SRC {}plane", inst.src_planes)?;
    for (i, (&reg, &size)) in registers::E_SOURCE_ADDRS
        .iter()
        .zip(inst.plane_sizes.iter())
        .take(planes)
        .enumerate()
    {
        write!(sink, ", [{i}]:{:#x}++{:#x}", read_reg(ctx.regs, reg)?, size)?;
    }
    writeln!(sink)?;

    writeln!(
        sink,
        "DST:{:#x}++{:#x}, scratch:{:#x}++{:#x}",
        read_reg(ctx.regs, registers::E_STREAM_BUFFER_ADDR)?,
        read_reg(ctx.regs, registers::E_STREAM_BUFFER_SIZE)?,
        read_reg(ctx.regs, registers::E_SCRATCH_BUFFER_ADDR)?,
        read_reg(ctx.regs, registers::E_SCRATCH_BUFFER_SIZE)?,
    )?;
    writeln!(
        sink,
        "DPB [0] plane:++{:#x}, [1] plane:++{:#x}, ME buffer:++{:#x}",
        inst.luma_dpb_size, inst.chroma_dpb_size, inst.me_buffer_size,
    )?;

    write_hex_block(
        sink,
        ctx.regs,
        "[0] plane ",
        registers::E_LUMA_DPB,
        registers::E_DPB_WINDOW_LEN,
    )?;
    write_hex_block(
        sink,
        ctx.regs,
        "[1] plane ",
        registers::E_CHROMA_DPB,
        registers::E_DPB_WINDOW_LEN,
    )?;
    write_hex_block(
        sink,
        ctx.regs,
        "ME buffer ",
        registers::E_ME_BUFFER,
        registers::E_DPB_WINDOW_LEN,
    )?;
    Ok(())
}

/// Targeted buffer dump for the MMU fault handler.
///
/// Renders the common/instance/codec buffer ranges of the instance that
/// currently owns the hardware, then its buffer windows. A device with no
/// current instance produces no output; there is nothing to attribute the
/// fault to.
///
/// # Errors
///
/// Returns an error when a register read falls outside the mapped space or
/// the sink rejects output.
pub fn dump_buffer_info<W: core::fmt::Write>(
    sink: &mut W,
    ctx: &DeviceContext<'_>,
    fault_addr: u64,
) -> RegdumpResult<()> {
    let Some(inst) = ctx.current_instance_state() else {
        return Ok(());
    };

    writeln!(
        sink,
        "----------- dumping VPU buffer info (fault at: {fault_addr:#x})"
    )?;
    writeln!(
        sink,
        "common:{:#x}~{:#x}, instance:{:#x}~{:#x}, codec:{:#x}~{:#x}",
        ctx.common_ctx_buf.addr,
        ctx.common_ctx_buf.end(),
        inst.instance_buf.addr,
        inst.instance_buf.end(),
        inst.codec_buf.addr,
        inst.codec_buf.end(),
    )?;
    dump_instance_buffers(sink, ctx, inst)
}
