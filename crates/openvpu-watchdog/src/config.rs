//! Watchdog timing configuration.

use serde::{Deserialize, Serialize};

use crate::error::{WatchdogError, WatchdogResult};

/// Default number of timer ticks before the worker is kicked.
pub const DEFAULT_TICKS_TO_ARM: u32 = 4;

/// Configuration for a [`WatchdogMonitor`](crate::monitor::WatchdogMonitor).
///
/// The device driver resets the tick counter on every serviced interrupt, so
/// `ticks_to_arm` bounds how many timer periods the hardware may stay silent
/// before the worker runs. A pending firmware command buys extra grace up to
/// [`grace_ceiling`](Self::grace_ceiling) ticks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchdogConfig {
    /// Timer ticks without hardware activity before the worker is scheduled.
    pub ticks_to_arm: u32,
    /// Dump the firmware debug-info region alongside the SFR regions.
    pub debug_info_enabled: bool,
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            ticks_to_arm: DEFAULT_TICKS_TO_ARM,
            debug_info_enabled: false,
        }
    }
}

impl WatchdogConfig {
    /// Create a builder for constructing a configuration.
    #[must_use]
    pub fn builder() -> WatchdogConfigBuilder {
        WatchdogConfigBuilder::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WatchdogError::InvalidConfiguration`] if `ticks_to_arm` is
    /// zero, which would arm the watchdog on every timer period regardless of
    /// hardware activity.
    pub fn validate(&self) -> WatchdogResult<()> {
        if self.ticks_to_arm == 0 {
            return Err(WatchdogError::invalid_configuration(
                "ticks_to_arm must be at least 1",
            ));
        }
        Ok(())
    }

    /// Tick count at which a pending firmware command no longer defers the
    /// timeout: three full arming periods.
    #[must_use]
    pub fn grace_ceiling(&self) -> u32 {
        self.ticks_to_arm.saturating_mul(3)
    }
}

/// Builder for [`WatchdogConfig`].
#[derive(Debug, Clone, Default)]
pub struct WatchdogConfigBuilder {
    ticks_to_arm: Option<u32>,
    debug_info_enabled: Option<bool>,
}

impl WatchdogConfigBuilder {
    /// Set the number of inactive timer ticks before the worker is scheduled.
    #[must_use]
    pub fn ticks_to_arm(mut self, ticks: u32) -> Self {
        self.ticks_to_arm = Some(ticks);
        self
    }

    /// Enable or disable the extended firmware debug-info dump.
    #[must_use]
    pub fn debug_info_enabled(mut self, enabled: bool) -> Self {
        self.debug_info_enabled = Some(enabled);
        self
    }

    /// Build the configuration, falling back to defaults for unset fields.
    #[must_use]
    pub fn build(self) -> WatchdogConfig {
        WatchdogConfig {
            ticks_to_arm: self.ticks_to_arm.unwrap_or(DEFAULT_TICKS_TO_ARM),
            debug_info_enabled: self.debug_info_enabled.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WatchdogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ticks_to_arm, DEFAULT_TICKS_TO_ARM);
        assert!(!config.debug_info_enabled);
    }

    #[test]
    fn test_zero_ticks_rejected() {
        let config = WatchdogConfig::builder().ticks_to_arm(0).build();
        assert!(matches!(
            config.validate(),
            Err(WatchdogError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_grace_ceiling_is_three_periods() {
        let config = WatchdogConfig::builder().ticks_to_arm(4).build();
        assert_eq!(config.grace_ceiling(), 12);
    }

    #[test]
    fn test_grace_ceiling_saturates() {
        let config = WatchdogConfig::builder().ticks_to_arm(u32::MAX).build();
        assert_eq!(config.grace_ceiling(), u32::MAX);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = WatchdogConfig::builder()
            .ticks_to_arm(8)
            .debug_info_enabled(true)
            .build();
        let json = serde_json::to_string(&config).unwrap();
        let back: WatchdogConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
