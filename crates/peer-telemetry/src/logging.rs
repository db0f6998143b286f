//! Structured logging setup.
//!
//! Installs a global `tracing` subscriber filtered by `TelemetryConfig::log_level`,
//! with plain or JSON output. Installation happens at most once per process;
//! later calls only validate the filter.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Outcome of [`init_logging`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingInit {
    /// This call installed the global subscriber.
    Installed,
    /// A global subscriber was already present and was left in place.
    AlreadyInstalled,
}

/// Build the log filter for `config`.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| {
        TelemetryError::Config(format!("invalid log filter {:?}: {e}", config.log_level))
    })
}

/// Install the global subscriber.
pub fn init_logging(config: &TelemetryConfig) -> Result<LoggingInit, TelemetryError> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json_logs {
        registry
            .with(fmt::layer().json().with_target(config.with_target))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(config.with_target))
            .try_init()
    };

    match installed {
        Ok(()) => {
            tracing::debug!(
                service = %config.service_name,
                json_logs = config.json_logs,
                "Structured logging configured"
            );
            Ok(LoggingInit::Installed)
        }
        Err(_) => Ok(LoggingInit::AlreadyInstalled),
    }
}
