//! Prelude for openvpu-watchdog.
//!
//! Re-exports the most commonly used types for convenient importing.
//!
//! # Example
//!
//! ```rust
//! use openvpu_watchdog::prelude::*;
//!
//! let monitor = WatchdogMonitor::new(WatchdogConfig::default())?;
//! monitor.record_activity();
//! # Ok::<(), WatchdogError>(())
//! ```

pub use crate::config::{WatchdogConfig, WatchdogConfigBuilder};
pub use crate::error::{WatchdogError, WatchdogResult};
pub use crate::halt::{AbortHalt, HaltPolicy};
pub use crate::monitor::WatchdogMonitor;
pub use crate::ticks::WatchdogTicks;
