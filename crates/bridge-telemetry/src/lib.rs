//! # Bridge Telemetry
//!
//! Logging initialization for HTLC bridge processes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bridge_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let _guard = init_telemetry(TelemetryConfig::from_env()).expect("Failed to init telemetry");
//!
//!     // Bridge service runs here; its tracing events reach the subscriber
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BRIDGE_SERVICE_NAME` | `htlc-bridge` | Service name in the startup line |
//! | `BRIDGE_LOG_LEVEL` / `RUST_LOG` | `info` | Level filter directives |
//! | `BRIDGE_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `BRIDGE_JSON_LOGS` | `false` (`true` in containers) | JSON lines output |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;

#[doc(hidden)]
pub use tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("Telemetry already initialized: {0}")]
    AlreadyInitialized(String),

    /// Configuration could not be applied.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Install the global logging subscriber.
///
/// Returns a guard to hold for the lifetime of the process. Calling this a
/// second time returns `TelemetryError::AlreadyInitialized`.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    logging::init_logging(&config)?;

    tracing::info!(
        service = %config.service_name,
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );

    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}

/// Guard that keeps telemetry active. Logs shutdown on drop.
pub struct TelemetryGuard {
    service_name: String,
}

impl TelemetryGuard {
    /// Service name the subscriber was installed for.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry...");
    }
}

/// Span carrying bridge context fields.
///
/// ```rust,ignore
/// let _span = bridge_span!("settle", owner = %hex_owner).entered();
/// ```
#[macro_export]
macro_rules! bridge_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::tracing::info_span!($name, subsystem = "bridge" $(, $($field)*)?)
    };
}
