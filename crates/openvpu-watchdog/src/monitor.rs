//! Watchdog decision logic and crash-diagnostics capture.

use core::fmt;

use openvpu_device_state::{DeviceContext, DeviceSnapshot};
use openvpu_regdump::{RegdumpError, dump_all};
use openvpu_trace::TRACE_PRINT_COUNT;
use tracing::{error, info, warn};

use crate::config::WatchdogConfig;
use crate::error::WatchdogResult;
use crate::halt::{AbortHalt, HaltPolicy};
use crate::ticks::WatchdogTicks;

/// Hardware-liveness monitor for one VPU device.
///
/// The driver wires three entry points to it: [`record_activity`] from the
/// device interrupt handler, [`timer_tick`] from the periodic timer, and
/// [`on_watchdog_tick`] from the worker the timer schedules once the tick
/// count reaches the arming threshold. The worker either concludes the
/// hardware is alive (or still legitimately busy) and returns, or captures
/// diagnostics and halts the process.
///
/// [`record_activity`]: Self::record_activity
/// [`timer_tick`]: Self::timer_tick
/// [`on_watchdog_tick`]: Self::on_watchdog_tick
#[derive(Debug)]
pub struct WatchdogMonitor<H: HaltPolicy = AbortHalt> {
    config: WatchdogConfig,
    ticks: WatchdogTicks,
    halt: H,
}

impl WatchdogMonitor<AbortHalt> {
    /// Create a monitor with the production abort-on-timeout policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: WatchdogConfig) -> WatchdogResult<Self> {
        Self::with_halt_policy(config, AbortHalt)
    }
}

impl<H: HaltPolicy> WatchdogMonitor<H> {
    /// Create a monitor with a custom halt policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn with_halt_policy(config: WatchdogConfig, halt: H) -> WatchdogResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ticks: WatchdogTicks::new(),
            halt,
        })
    }

    /// The configuration this monitor was built with.
    #[must_use]
    pub fn config(&self) -> &WatchdogConfig {
        &self.config
    }

    /// Current tick count.
    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.ticks.ticks()
    }

    /// Reset the tick count. Called from the device interrupt handler each
    /// time the hardware raises an interrupt.
    pub fn record_activity(&self) {
        self.ticks.record_activity();
    }

    /// Advance the tick count by one timer period. Returns `true` when the
    /// count has reached the arming threshold and the caller should schedule
    /// [`on_watchdog_tick`](Self::on_watchdog_tick).
    pub fn timer_tick(&self) -> bool {
        self.ticks.advance() >= self.config.ticks_to_arm
    }

    /// Worker body: decide whether the hardware is hung and, if so, capture
    /// diagnostics and halt.
    ///
    /// Returns without side effects when a capture is already in flight, when
    /// an interrupt reset the tick count after the worker was scheduled, or
    /// when a pending firmware command still has grace ticks left.
    pub fn on_watchdog_tick(&self, ctx: &DeviceContext<'_>) {
        if self.ticks.is_running() {
            error!("watchdog already running");
            return;
        }

        let ticks = self.ticks.ticks();
        if ticks == 0 {
            info!("interrupt handler reset the watchdog; hardware is alive");
            return;
        }

        // Only consult the firmware command layer on a powered, clocked
        // device; the registers backing it are unreadable otherwise.
        if ctx.pm.power_ref_count() > 0 && ctx.pm.clock_ref_count() > 0 {
            let cmd = ctx.cmd.pending_command();
            if cmd != 0 {
                if ticks >= self.config.grace_ceiling() {
                    error!(cmd, ticks, "command stalled past grace ceiling; timeout");
                } else {
                    warn!(cmd, ticks, "spurious watchdog: command still pending");
                    return;
                }
            } else {
                error!(ticks, "watchdog timeout with no pending command");
            }
        } else {
            error!(ticks, "watchdog timeout on unpowered device");
        }

        if !self.ticks.begin_capture() {
            error!("watchdog already running");
            return;
        }
        self.capture_and_halt(ctx)
    }

    /// Render the full diagnostics report: device snapshot, recent trace
    /// entries, register dump, then MMU fault status.
    ///
    /// Best effort: a register-space precondition failure is rendered inline
    /// and the remaining sections still appear.
    ///
    /// # Errors
    ///
    /// Returns an error only when the sink rejects output.
    pub fn write_capture_report<W: fmt::Write>(
        &self,
        ctx: &DeviceContext<'_>,
        sink: &mut W,
    ) -> fmt::Result {
        let snapshot = DeviceSnapshot::capture(ctx);
        write!(sink, "{snapshot}")?;

        writeln!(sink, "----------- dumping VPU trace info -----------")?;
        for rec in ctx.trace.dump_recent(TRACE_PRINT_COUNT) {
            writeln!(
                sink,
                "VPU trace[{}]: time={}, str={}",
                rec.slot, rec.timestamp_ns, rec.message
            )?;
        }

        match dump_all(sink, ctx, self.config.debug_info_enabled) {
            Ok(()) => {}
            Err(RegdumpError::Format(e)) => return Err(e),
            Err(err) => writeln!(sink, "register dump failed: {err}")?,
        }

        writeln!(sink, "----------- dumping VPU MMU fault status -----------")?;
        ctx.mmu.write_fault_status(sink)?;

        Ok(())
    }

    fn capture_and_halt(&self, ctx: &DeviceContext<'_>) -> ! {
        ctx.trace.record("** VPU will stop");

        let mut report = String::new();
        if let Err(err) = self.write_capture_report(ctx, &mut report) {
            error!(%err, "diagnostics capture incomplete");
        }
        for line in report.lines() {
            error!("{line}");
        }
        error!("halting after VPU watchdog timeout");
        self.halt.halt()
    }
}
