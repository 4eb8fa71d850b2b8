//! On-demand device state snapshot for the crash dump.

use serde::{Deserialize, Serialize};

use crate::context::DeviceContext;
use crate::instance::CodecKind;
use crate::traits::QueueKind;

/// Per-instance slice of a [`DeviceSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceSnapshot {
    /// Instance identifier.
    pub id: u32,
    /// Decoder, encoder, or unknown.
    pub codec_kind: CodecKind,
    /// Raw codec mode code.
    pub codec_mode: u32,
    /// Raw lifecycle state code.
    pub lifecycle_state: u32,
    /// Source buffer queue depth at capture time.
    pub src_queue_depth: u32,
    /// Destination buffer queue depth at capture time.
    pub dst_queue_depth: u32,
    /// Latched interrupt condition flag.
    pub interrupt_condition: bool,
    /// Last interrupt reason code.
    pub interrupt_reason: u32,
    /// Last interrupt error code.
    pub interrupt_error: u32,
}

/// Ephemeral read-only view of device state, assembled fresh on each dump.
///
/// Never cached: by the time a snapshot is taken the hardware is suspected
/// dead and this value is the forensic record. Capture tolerates concurrent
/// mutation of the underlying state; consistency is best-effort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    /// Power domain reference count.
    pub power_ref_count: u32,
    /// Clock domain reference count.
    pub clock_ref_count: u32,
    /// Number of allocated instances.
    pub instance_count: u32,
    /// Number of DRM-protected instances.
    pub drm_instance_count: u32,
    /// Firmware load/boot status code.
    pub firmware_status: u32,
    /// Hardware lock bitmask over instances.
    pub hardware_lock_bits: u64,
    /// Hardware lock bitmask for device-global operations.
    pub device_lock_bits: u64,
    /// Instance currently owning the hardware.
    pub current_instance_index: Option<usize>,
    /// Whether the current instance runs in the secure (DRM) path.
    pub current_is_drm: bool,
    /// Instance that preempted the schedule.
    pub preempt_instance_index: Option<usize>,
    /// Pending work bitmask over instances.
    pub pending_work_bits: u64,
    /// Allocated instances, in slot order.
    pub instances: Vec<InstanceSnapshot>,
}

impl DeviceSnapshot {
    /// Assemble a snapshot from the live context.
    ///
    /// Read-only: inspects collaborators and the instance table without
    /// mutating anything. Absent instance slots are skipped.
    #[must_use]
    pub fn capture(ctx: &DeviceContext<'_>) -> Self {
        let instances = ctx
            .instances
            .iter()
            .filter_map(Option::as_ref)
            .map(|inst| InstanceSnapshot {
                id: inst.id,
                codec_kind: inst.kind,
                codec_mode: inst.codec_mode,
                lifecycle_state: inst.state,
                src_queue_depth: ctx.queues.queue_depth(inst.id, QueueKind::Source),
                dst_queue_depth: ctx.queues.queue_depth(inst.id, QueueKind::Destination),
                interrupt_condition: inst.int_condition,
                interrupt_reason: inst.int_reason,
                interrupt_error: inst.int_err,
            })
            .collect();

        Self {
            power_ref_count: ctx.pm.power_ref_count(),
            clock_ref_count: ctx.pm.clock_ref_count(),
            instance_count: ctx.instance_count(),
            drm_instance_count: ctx.drm_instance_count,
            firmware_status: ctx.firmware_status,
            hardware_lock_bits: ctx.hwlock_bits,
            device_lock_bits: ctx.hwlock_dev_bits,
            current_instance_index: ctx.current_instance,
            current_is_drm: ctx.current_is_drm,
            preempt_instance_index: ctx.preempt_instance,
            pending_work_bits: ctx.work_bits,
            instances,
        }
    }
}

impl core::fmt::Display for DeviceSnapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "----------- dumping VPU device info -----------")?;
        writeln!(
            f,
            "power:{}, clock:{}, num_inst:{}, num_drm_inst:{}, fw_status:{}",
            self.power_ref_count,
            self.clock_ref_count,
            self.instance_count,
            self.drm_instance_count,
            self.firmware_status,
        )?;
        writeln!(
            f,
            "hwlock bits:{:#x} / dev:{:#x}, curr_inst:{} (is_drm:{}), preempt_inst:{}, work_bits:{:#x}",
            self.hardware_lock_bits,
            self.device_lock_bits,
            display_index(self.current_instance_index),
            u8::from(self.current_is_drm),
            display_index(self.preempt_instance_index),
            self.pending_work_bits,
        )?;
        for inst in &self.instances {
            writeln!(
                f,
                "inst[{}] {}({}) state:{}, queue_cnt(src:{}, dst:{}), interrupt(cond:{}, reason:{}, err:{})",
                inst.id,
                inst.codec_kind,
                inst.codec_mode,
                inst.lifecycle_state,
                inst.src_queue_depth,
                inst.dst_queue_depth,
                u8::from(inst.interrupt_condition),
                inst.interrupt_reason,
                inst.interrupt_error,
            )?;
        }
        Ok(())
    }
}

/// Render an optional slot index the way the hardware log does: -1 for none.
fn display_index(index: Option<usize>) -> i64 {
    index.map_or(-1, |v| v as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_index() {
        assert_eq!(display_index(None), -1);
        assert_eq!(display_index(Some(3)), 3);
    }
}
