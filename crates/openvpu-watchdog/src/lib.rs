//! # openvpu-watchdog
//!
//! Hardware-liveness watchdog and crash-diagnostics capture for the OpenVPU
//! codec accelerator driver.
//!
//! The only liveness signal available is "has any command completion
//! happened since the last tick": the command-completion path resets a
//! shared counter, an external periodic timer advances it, and the monitor
//! judges the hardware dead when the counter keeps growing. On a confirmed
//! timeout the monitor captures the full forensic record — device state
//! snapshot, trace ring contents, raw register dump, MMU fault status — and
//! performs a fatal, non-returning halt. Operating an accelerator believed
//! to be hung risks corrupting data, so the design prefers a loud stop over
//! any attempt at self-healing.
//!
//! ## Escalation
//!
//! ```text
//! timer ──advance()──► tick_count        completion ──record_activity()──► 0
//!
//! on_watchdog_tick():
//!   running?            ──► log, return          (re-entrant guard)
//!   tick_count == 0?    ──► return               (hardware alive)
//!   command pending?
//!     below 3x ceiling  ──► log, return          (one more grace period)
//!     at/past ceiling   ──► capture + halt       (pending too long)
//!   no command pending  ──► capture + halt       (unexplained timeout)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use openvpu_watchdog::prelude::*;
//!
//! let config = WatchdogConfig::builder().ticks_to_arm(4).build();
//! let monitor = WatchdogMonitor::new(config)?;
//!
//! // Timer path: advance once per watchdog period, schedule the worker
//! // once the count reaches the arm threshold.
//! let should_run = monitor.timer_tick();
//!
//! // Completion path: any interrupt proves the hardware alive.
//! monitor.record_activity();
//! assert!(!should_run);
//! # Ok::<(), openvpu_watchdog::WatchdogError>(())
//! ```

#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod halt;
pub mod monitor;
pub mod prelude;
pub mod ticks;

pub use config::{WatchdogConfig, WatchdogConfigBuilder};
pub use error::{WatchdogError, WatchdogResult};
pub use halt::{AbortHalt, HaltPolicy};
pub use monitor::WatchdogMonitor;
pub use ticks::WatchdogTicks;
