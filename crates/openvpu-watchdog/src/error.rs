//! Error types for the watchdog.
//!
//! Liveness decisions are local and nothing here returns a recoverable error
//! to a caller: the externally visible outcomes are silent return (hardware
//! presumed alive) or the fatal halt. The only fallible surface is
//! configuration validation.

use thiserror::Error;

/// Errors that can occur while constructing a watchdog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WatchdogError {
    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl WatchdogError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}

/// A specialized `Result` type for watchdog operations.
pub type WatchdogResult<T> = std::result::Result<T, WatchdogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WatchdogError::invalid_configuration("ticks_to_arm must be at least 1");
        assert!(err.to_string().contains("ticks_to_arm"));
    }
}
