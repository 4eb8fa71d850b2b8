//! The explicit device context handed into every diagnostic entry point.

use openvpu_trace::TraceRing;

use crate::instance::{BufferRange, InstanceState};
use crate::traits::{CommandLayer, MmuFaultReporter, PowerDomain, QueueSubsystem, RegisterSpace};

/// Read-only view of one codec device plus its collaborator subsystems.
///
/// The original design kept this state in a global device table; here it is
/// an explicit context object so the "current instance" and "preempted
/// instance" notions are visible fields rather than implicit globals, and so
/// tests can assemble a device from software collaborators.
///
/// The per-instance table is read without an exclusive lock during snapshot
/// capture; slots that are `None` were never allocated and are skipped.
pub struct DeviceContext<'a> {
    /// Power/clock domain collaborator.
    pub pm: &'a dyn PowerDomain,
    /// Command layer collaborator.
    pub cmd: &'a dyn CommandLayer,
    /// Buffer queue subsystem collaborator.
    pub queues: &'a dyn QueueSubsystem,
    /// MMU fault reporting collaborator.
    pub mmu: &'a dyn MmuFaultReporter,
    /// Mapped control-register space.
    pub regs: &'a dyn RegisterSpace,
    /// The device's trace ring.
    pub trace: &'a TraceRing,
    /// Instance table; absent slots were never allocated.
    pub instances: &'a [Option<InstanceState>],
    /// Firmware load/boot status code.
    pub firmware_status: u32,
    /// Hardware lock bitmask over instances.
    pub hwlock_bits: u64,
    /// Hardware lock bitmask for device-global operations.
    pub hwlock_dev_bits: u64,
    /// Pending work bitmask over instances.
    pub work_bits: u64,
    /// Index of the instance currently owning the hardware, if any.
    pub current_instance: Option<usize>,
    /// Whether the current instance runs in the secure (DRM) path.
    pub current_is_drm: bool,
    /// Index of the instance that preempted the schedule, if any.
    pub preempt_instance: Option<usize>,
    /// Number of DRM-protected instances among the allocated slots.
    pub drm_instance_count: u32,
    /// Firmware common context buffer shared by all instances.
    pub common_ctx_buf: BufferRange,
}

impl<'a> DeviceContext<'a> {
    /// Number of allocated instance slots.
    #[must_use]
    pub fn instance_count(&self) -> u32 {
        self.instances.iter().filter(|slot| slot.is_some()).count() as u32
    }

    /// State of the instance currently owning the hardware, if any.
    #[must_use]
    pub fn current_instance_state(&self) -> Option<&'a InstanceState> {
        let index = self.current_instance?;
        self.instances.get(index)?.as_ref()
    }
}

impl core::fmt::Debug for DeviceContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DeviceContext")
            .field("instance_count", &self.instance_count())
            .field("firmware_status", &self.firmware_status)
            .field("hwlock_bits", &self.hwlock_bits)
            .field("work_bits", &self.work_bits)
            .field("current_instance", &self.current_instance)
            .field("preempt_instance", &self.preempt_instance)
            .finish_non_exhaustive()
    }
}
