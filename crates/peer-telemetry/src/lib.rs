//! # Peer Telemetry
//!
//! Structured logging and Prometheus metrics for the peer.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use peer_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let telemetry = init_telemetry(&TelemetryConfig::from_env())?;
//!     telemetry.metrics.sys_ccs_registered.set(4);
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `peer` | Service name in logs |
//! | `PC_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter |
//! | `PC_JSON_LOGS` | `false` | JSON log output |
//! | `PC_LOG_TARGET` | `true` | Include event targets |

#![warn(missing_docs)]

mod config;
mod logging;
mod metrics;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging, LoggingInit};
pub use metrics::{MetricsHandle, OUTCOME_FAILURE, OUTCOME_SUCCESS};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Metric creation or registration failed.
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    /// Invalid configuration, e.g. an unparsable log filter.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Active telemetry: the logging outcome and the metrics handle.
#[derive(Debug, Clone)]
pub struct Telemetry {
    /// Whether this call installed the global subscriber.
    pub logging: LoggingInit,
    /// Peer metrics.
    pub metrics: MetricsHandle,
}

/// Initialize logging and metrics.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<Telemetry, TelemetryError> {
    let metrics = MetricsHandle::new()?;
    let logging = init_logging(config)?;

    Ok(Telemetry { logging, metrics })
}
