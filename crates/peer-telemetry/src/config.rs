//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for logging and metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log filter directive (e.g. `info`, `pc_01_endorser=debug`)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Whether to include the event target in log lines
    pub with_target: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "peer".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            with_target: true,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OTEL_SERVICE_NAME`: Service name (default: peer)
    /// - `PC_LOG_LEVEL` or `RUST_LOG`: Log filter (default: info)
    /// - `PC_JSON_LOGS`: Enable JSON logs (default: false, true in containers)
    /// - `PC_LOG_TARGET`: Include event targets (default: true)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "peer".to_string()),

            log_level: env::var("PC_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("PC_JSON_LOGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(is_container),

            with_target: env::var("PC_LOG_TARGET")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    /// Configuration for a named peer, e.g. `peer0.org1`.
    pub fn for_peer(peer_name: &str) -> Self {
        let mut config = Self::from_env();
        config.service_name = format!("peer-{peer_name}");
        config
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}
