//! # Node Configuration
//!
//! Unified configuration for telemetry, system chaincode registration and the
//! channels the peer joins at boot.

use std::env;

use pc_01_endorser::service::AssemblerConfig;
use pc_02_system_chaincodes::domain::{Whitelist, WHITELIST_ENV_VAR};
use peer_telemetry::TelemetryConfig;

/// Complete node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Peer name, e.g. `peer0.org1`.
    pub peer_name: String,
    /// Logging and metrics.
    pub telemetry: TelemetryConfig,
    /// System chaincodes allowed to register.
    pub whitelist: Whitelist,
    /// Channels joined at boot.
    pub channels: Vec<String>,
    /// Private write set assembly.
    pub assembler: AssemblerConfig,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            peer_name: "peer0".to_string(),
            telemetry: TelemetryConfig::default(),
            whitelist: default_whitelist(),
            channels: vec!["mychannel".to_string()],
            assembler: AssemblerConfig::default(),
        }
    }
}

impl NodeConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PC_PEER_NAME`: Peer name (default: peer0)
    /// - `PC_CHAINCODE_SYSTEM`: System chaincode whitelist (default: lscc, cscc,
    ///   qscc and sample_syscc enabled)
    /// - `PC_CHANNELS`: Comma-separated channels to join (default: mychannel)
    /// - `PC_VERIFY_PVT_INVARIANTS`: Verify assembled private data (default:
    ///   on in debug builds)
    /// - Telemetry variables, see `TelemetryConfig::from_env`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let peer_name = env::var("PC_PEER_NAME").unwrap_or(defaults.peer_name);

        Self {
            telemetry: TelemetryConfig::for_peer(&peer_name),
            peer_name,
            whitelist: env::var(WHITELIST_ENV_VAR)
                .map(|raw| Whitelist::parse(&raw))
                .unwrap_or(defaults.whitelist),
            channels: env::var("PC_CHANNELS")
                .map(|raw| parse_channels(&raw))
                .unwrap_or(defaults.channels),
            assembler: AssemblerConfig {
                verify_invariants: env::var("PC_VERIFY_PVT_INVARIANTS")
                    .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                    .unwrap_or(defaults.assembler.verify_invariants),
            },
        }
    }
}

/// Whitelist used when `PC_CHAINCODE_SYSTEM` is unset.
#[must_use]
pub fn default_whitelist() -> Whitelist {
    Whitelist::parse("cscc=enable,lscc=enable,qscc=enable,sample_syscc=enable")
}

/// Split a comma-separated channel list, dropping blanks and duplicates.
#[must_use]
pub fn parse_channels(raw: &str) -> Vec<String> {
    let mut channels: Vec<String> = Vec::new();
    for channel in raw.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        if !channels.iter().any(|c| c == channel) {
            channels.push(channel.to_string());
        }
    }
    channels
}
